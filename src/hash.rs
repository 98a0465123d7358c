mod fnv;

pub(crate) use fnv::hash_password;
