/// Default hasher for map index tables.
pub(crate) type DefaultHashBuilder = foldhash::fast::RandomState;
