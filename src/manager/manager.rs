use std::cell::{
    Ref,
    RefCell
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::managererror::{ManagerError, parse_json_value};


#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}


/// Named registry of objects built from JSON.
///
/// Insertion order is remembered so that `values()` is deterministic; a
/// re-inserted name keeps its original position and takes the new value.
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>>;

    fn names(&self) -> Ref<'_, Vec<String>>;

    fn insert(&self, name: String, v: V);

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn len(&self) -> usize {
        self.names().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn values(&self) -> Vec<V> {
        let map = self.map();
        self.names()
            .iter()
            .filter_map(|name| map.get(name).cloned())
            .collect()
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    names_cell: RefCell<Vec<String>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {
            map_cell: RefCell::new(HashMap::new()),
            names_cell: RefCell::new(Vec::new()),
            get_obj_from_json
        }
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>> {
        self.map_cell.borrow()
    }

    fn names(&self) -> Ref<'_, Vec<String>> {
        self.names_cell.borrow()
    }

    fn insert(&self, name: String, v: V) {
        let previous = self.map_cell.borrow_mut().insert(name.clone(), v);
        if previous.is_none() {
            self.names_cell.borrow_mut().push(name);
        } else {
            debug!(name = %name, "replaced existing entry");
        }
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.insert(named_object.name, v);
        Ok(())
    }
}
