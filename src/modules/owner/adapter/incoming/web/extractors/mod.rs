pub mod panel_token;
