pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("A node cannot connect to itself ({node_id})")]
    SelfConnection { node_id: String },

    #[error("Unknown node id: {node_id}")]
    UnknownNode { node_id: String },

    #[error("Invalid graph file: {message}")]
    Format { message: String },
}
