pub mod add_node_use_case;
pub mod get_key_use_case;
pub mod put_key_use_case;
pub mod remove_node_use_case;

pub use add_node_use_case::{AddNodeUseCaseInput, AddNodeUseCaseOutput};
pub use get_key_use_case::{GetKeyUseCaseInput, GetKeyUseCaseOutput};
pub use put_key_use_case::{PutKeyUseCaseInput, PutKeyUseCaseOutput};
pub use remove_node_use_case::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput};
