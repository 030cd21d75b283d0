/// Primary keys of `productos` are PostgreSQL BIGSERIAL.
pub type DbId = i64;
