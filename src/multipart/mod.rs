pub mod multipart_body;
pub mod multipart_part;
