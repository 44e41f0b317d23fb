//! Service layer separating file I/O from the keying logic

pub mod io;

pub use io::ImageIOService;
