use std::collections::HashMap;

use super::impl_reflect_map;

impl_reflect_map!(HashMap, S);
