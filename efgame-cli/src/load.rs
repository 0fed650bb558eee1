use std::fs;

use efgame_engine::game_structure::RawGraph;

/// Loads a raw adjacency declaration from a JSON file of the form
/// `{"1": [2, 3], "2": [3]}`. Declaration order is preserved; it becomes the
/// vertex enumeration order of the symmetrized graph.
pub fn load_raw_graph(path: &str) -> Result<RawGraph, String> {
    let content = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read graph file '{}'. {}", path, err))?;
    serde_json::from_str(&content)
        .map_err(|err| format!("Failed to parse graph file '{}'. {}", path, err))
}
