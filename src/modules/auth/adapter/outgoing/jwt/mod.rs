mod payload_decoder;

pub use payload_decoder::JwtPayloadDecoder;
