pub mod collection_reader;
pub mod remote_relay;
pub mod upload_gateway;

pub use collection_reader::CollectionReader;
pub use remote_relay::RemoteRelay;
pub use upload_gateway::UploadGateway;
