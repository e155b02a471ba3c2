// src/languages.rs

const EMBEDDED_CATALOG: &str = include_str!("data/languages.yaml");

/// Carga la lista de idiomas desde el YAML embebido
pub fn language_catalog() -> Vec<String> {
    parse_catalog(EMBEDDED_CATALOG).unwrap_or_else(|err| {
        log::error!("no se pudo parsear el catálogo de idiomas: {err}");
        Vec::new()
    })
}

/// Quita vacíos y duplicados, conservando el orden del fichero.
pub fn parse_catalog(yaml: &str) -> Result<Vec<String>, serde_yaml::Error> {
    let raw: Vec<String> = serde_yaml::from_str(yaml)?;
    let mut catalog: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        let name = name.trim();
        if !name.is_empty() && !catalog.iter().any(|c| c == name) {
            catalog.push(name.to_string());
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = language_catalog();
        assert!(catalog.len() >= 20);
        assert!(catalog.iter().any(|l| l == "Swahili"));
        assert!(catalog.iter().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn parse_drops_blanks_and_duplicates() {
        let catalog = parse_catalog("- French\n- ' '\n- French\n- Thai\n").unwrap();
        assert_eq!(catalog, vec!["French".to_string(), "Thai".to_string()]);
    }

    #[test]
    fn parse_rejects_non_list() {
        assert!(parse_catalog("languages: French").is_err());
    }
}
