pub mod edge;
pub mod error;
pub mod node;

pub use edge::Edge;
pub use edge::EdgeDB;
pub use error::GraphError;
pub use node::NodeId;
pub use node::NodeRegistry;
