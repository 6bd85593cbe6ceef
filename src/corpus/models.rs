use serde::{Deserialize, Serialize};

/// A single recipe row. Immutable after load; its identity is its
/// position in the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub cuisine: String,
    pub ingredients: String,
    /// Ingredients after normalization, cached at load time
    pub normalized_ingredients: String,
    pub instructions: String,
}

/// The ordered, immutable set of recipes loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    recipes: Vec<Recipe>,
}

impl Corpus {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by its corpus position
    pub fn get(&self, id: usize) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Normalized ingredient strings in corpus order, the documents the
    /// similarity index is fitted over
    pub fn normalized_documents(&self) -> Vec<&str> {
        self.recipes
            .iter()
            .map(|r| r.normalized_ingredients.as_str())
            .collect()
    }

    /// Number of distinct cuisine labels
    pub fn cuisine_count(&self) -> usize {
        let mut cuisines: Vec<&str> = self.recipes.iter().map(|r| r.cuisine.as_str()).collect();
        cuisines.sort_unstable();
        cuisines.dedup();
        cuisines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, cuisine: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            ingredients: "salt".to_string(),
            normalized_ingredients: "salt".to_string(),
            instructions: "mix".to_string(),
        }
    }

    #[test]
    fn test_get_by_position() {
        let corpus = Corpus::new(vec![recipe("A", "Indian"), recipe("B", "Thai")]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().name, "B");
        assert!(corpus.get(2).is_none());
    }

    #[test]
    fn test_cuisine_count_dedupes() {
        let corpus = Corpus::new(vec![
            recipe("A", "Indian"),
            recipe("B", "Indian"),
            recipe("C", "Thai"),
        ]);
        assert_eq!(corpus.cuisine_count(), 2);
    }
}
