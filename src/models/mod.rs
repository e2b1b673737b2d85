pub mod cart;
pub mod chat;
pub mod order;
pub mod product;
pub mod user;

pub use cart::*;
pub use chat::*;
pub use order::*;
pub use product::*;
pub use user::*;
