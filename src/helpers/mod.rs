//! URL helper functions shared by the loader and the transform

mod url;

pub use url::*;
