mod inorder;
mod levelorder;
mod owned_iter;
mod postorder;
mod preorder;
mod range;

pub use inorder::*;
pub use levelorder::*;
pub use owned_iter::*;
pub use postorder::*;
pub use preorder::*;
pub use range::*;
