mod bridge;
mod codec;
mod errors;
