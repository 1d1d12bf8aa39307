pub mod message_url;
pub mod query_codec;
