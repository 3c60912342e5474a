mod encode;
mod decode;

pub use encode::encode;
pub use decode::decode;
