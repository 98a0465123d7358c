mod decode;
mod encode;
mod frame;
