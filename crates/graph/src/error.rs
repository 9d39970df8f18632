#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("input ended after {read} of {expected} edges")]
    UnexpectedEof { read: usize, expected: usize },

    #[error("invalid token {token:?} on line {line}")]
    InvalidToken { token: String, line: usize },

    #[error("vertex {vertex} on line {line} out of range for graph with {vertices} vertices")]
    VertexOutOfRange {
        vertex: usize,
        line: usize,
        vertices: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
