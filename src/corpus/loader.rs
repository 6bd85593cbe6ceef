use crate::corpus::models::{Corpus, Recipe};
use crate::error::{Error, Result};
use crate::nlp::Normalizer;
use std::path::Path;
use tracing::{debug, info};

// Accepted header spellings per semantic column; the upstream dataset
// ships with the Translated* names.
const NAME_COLUMNS: &[&str] = &["name", "TranslatedRecipeName"];
const CUISINE_COLUMNS: &[&str] = &["cuisine", "Cuisine"];
const INGREDIENTS_COLUMNS: &[&str] = &["ingredients", "TranslatedIngredients"];
const INSTRUCTIONS_COLUMNS: &[&str] = &["instructions", "TranslatedInstructions"];

/// Load the recipe dataset from a CSV file.
///
/// Rows missing ingredients or instructions are dropped. Cuisine defaults
/// to "Unknown" when the column is absent or the field is blank. Each kept
/// row's ingredients are normalized once and cached on the record.
///
/// A missing file or missing required columns is fatal; an empty corpus
/// after filtering is fatal too, since there would be nothing to index.
pub fn load_corpus(path: impl AsRef<Path>, normalizer: &dyn Normalizer) -> Result<Corpus> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::Dataset(format!("Failed to open dataset {}: {e}", path.display()))
    })?;

    let headers = reader.headers()?.clone();

    let name_idx = resolve_column(&headers, NAME_COLUMNS)
        .ok_or_else(|| missing_column(path, NAME_COLUMNS))?;
    let ingredients_idx = resolve_column(&headers, INGREDIENTS_COLUMNS)
        .ok_or_else(|| missing_column(path, INGREDIENTS_COLUMNS))?;
    let instructions_idx = resolve_column(&headers, INSTRUCTIONS_COLUMNS)
        .ok_or_else(|| missing_column(path, INSTRUCTIONS_COLUMNS))?;
    // Cuisine is optional; rows fall back to "Unknown"
    let cuisine_idx = resolve_column(&headers, CUISINE_COLUMNS);

    let mut recipes = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let name = record.get(name_idx).unwrap_or_default().trim();
        let ingredients = record.get(ingredients_idx).unwrap_or_default().trim();
        let instructions = record.get(instructions_idx).unwrap_or_default().trim();

        // Row-level skip: incomplete rows are dropped, not fatal
        if ingredients.is_empty() || instructions.is_empty() {
            debug!("Skipping row {}: missing ingredients or instructions", row + 2);
            skipped += 1;
            continue;
        }

        let cuisine = cuisine_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("Unknown")
            .to_string();

        recipes.push(Recipe {
            name: name.to_string(),
            cuisine,
            ingredients: ingredients.to_string(),
            normalized_ingredients: normalizer.normalize(ingredients),
            instructions: instructions.to_string(),
        });
    }

    if recipes.is_empty() {
        return Err(Error::Dataset(format!(
            "No usable rows in dataset {}",
            path.display()
        )));
    }

    info!(
        "Loaded {} recipes from {} ({} rows skipped)",
        recipes.len(),
        path.display(),
        skipped
    );

    Ok(Corpus::new(recipes))
}

/// Find the index of the first accepted header spelling
fn resolve_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.iter().any(|c| h.trim() == *c))
}

fn missing_column(path: &Path, candidates: &[&str]) -> Error {
    Error::Dataset(format!(
        "Dataset {} is missing required column (expected one of: {})",
        path.display(),
        candidates.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::EnglishNormalizer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        for line in lines {
            writeln!(file, "{line}").expect("write row");
        }
        file
    }

    #[test]
    fn test_load_basic_dataset() {
        let file = write_csv(&[
            "name,cuisine,ingredients,instructions",
            "Tomato Rice,Indian,tomato rice salt,Cook the rice",
            "Potato Curry,Indian,potato curry spices,Simmer gently",
        ]);

        let normalizer = EnglishNormalizer::new();
        let corpus = load_corpus(file.path(), &normalizer).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().name, "Tomato Rice");
        assert!(!corpus.get(0).unwrap().normalized_ingredients.is_empty());
    }

    #[test]
    fn test_load_accepts_upstream_headers() {
        let file = write_csv(&[
            "TranslatedRecipeName,Cuisine,TranslatedIngredients,TranslatedInstructions",
            "Masala Dosa,South Indian,rice lentils,Ferment overnight",
        ]);

        let normalizer = EnglishNormalizer::new();
        let corpus = load_corpus(file.path(), &normalizer).unwrap();

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get(0).unwrap().cuisine, "South Indian");
    }

    #[test]
    fn test_load_drops_incomplete_rows() {
        let file = write_csv(&[
            "name,cuisine,ingredients,instructions",
            "Complete,Indian,tomato rice,Cook it",
            "No Ingredients,Indian,,Cook it",
            "No Instructions,Indian,potato,",
        ]);

        let normalizer = EnglishNormalizer::new();
        let corpus = load_corpus(file.path(), &normalizer).unwrap();

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get(0).unwrap().name, "Complete");
    }

    #[test]
    fn test_load_defaults_cuisine_to_unknown() {
        let file = write_csv(&[
            "name,ingredients,instructions",
            "Mystery Dish,things,Do things",
        ]);

        let normalizer = EnglishNormalizer::new();
        let corpus = load_corpus(file.path(), &normalizer).unwrap();

        assert_eq!(corpus.get(0).unwrap().cuisine, "Unknown");
    }

    #[test]
    fn test_load_blank_cuisine_defaults_to_unknown() {
        let file = write_csv(&[
            "name,cuisine,ingredients,instructions",
            "Blank Cuisine,,things,Do things",
        ]);

        let normalizer = EnglishNormalizer::new();
        let corpus = load_corpus(file.path(), &normalizer).unwrap();

        assert_eq!(corpus.get(0).unwrap().cuisine, "Unknown");
    }

    #[test]
    fn test_load_missing_required_column_is_fatal() {
        let file = write_csv(&["name,cuisine,instructions", "Broken,Indian,Cook it"]);

        let normalizer = EnglishNormalizer::new();
        assert!(load_corpus(file.path(), &normalizer).is_err());
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let normalizer = EnglishNormalizer::new();
        assert!(load_corpus("/nonexistent/recipes.csv", &normalizer).is_err());
    }

    #[test]
    fn test_load_all_rows_dropped_is_fatal() {
        let file = write_csv(&[
            "name,cuisine,ingredients,instructions",
            "Empty One,Indian,,",
        ]);

        let normalizer = EnglishNormalizer::new();
        assert!(load_corpus(file.path(), &normalizer).is_err());
    }
}
