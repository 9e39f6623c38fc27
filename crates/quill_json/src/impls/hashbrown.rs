use super::impl_reflect_map;

impl_reflect_map!(hashbrown::HashMap, S);
