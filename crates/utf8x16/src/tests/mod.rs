mod encode_bad;
mod property_chunked;
mod utils;
