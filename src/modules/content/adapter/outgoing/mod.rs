mod document_store_http;

pub use document_store_http::HttpDocumentStore;
