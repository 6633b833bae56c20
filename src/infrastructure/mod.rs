pub mod document;
pub mod gate;
pub mod session;
pub mod store;

pub use gate::AccessGate;
pub use session::{FileSessionStore, SessionStore};
pub use store::EntryStore;
