use cartesian_product::{InvalidSetError, ProductGenerator, SetElement, SetParser};

fn elements(values: &[&str], set_name: &str) -> Vec<SetElement> {
    values
        .iter()
        .map(|value| SetElement::new(value, set_name))
        .collect()
}

#[test]
fn test_generate_row_major_order() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["1", "2"], "A");
    let set_b = elements(&["x", "y"], "B");

    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();

    let rendered: Vec<String> = product.iter().map(|pair| pair.to_string()).collect();
    assert_eq!(rendered, vec!["(1, x)", "(1, y)", "(2, x)", "(2, y)"]);
}

#[test]
fn test_generate_length_matches_cardinality() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["1", "2", "3"], "A");
    let set_b = elements(&["a", "b", "c", "d"], "B");

    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();
    assert_eq!(product.len(), 12);
    assert_eq!(
        generator.cardinality(Some(&set_a), Some(&set_b)),
        product.len()
    );
}

#[test]
fn test_generate_indexing_law() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["p", "q", "r"], "A");
    let set_b = elements(&["1", "2"], "B");

    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();

    for (i, element_a) in set_a.iter().enumerate() {
        for (j, element_b) in set_b.iter().enumerate() {
            let pair = &product[i * set_b.len() + j];
            assert_eq!(pair.first().value(), element_a.value());
            assert_eq!(pair.second().value(), element_b.value());
        }
    }
}

#[test]
fn test_generate_rejects_missing_sets() {
    let generator = ProductGenerator::new();
    let set_b = elements(&["1"], "B");

    assert_eq!(
        generator.generate(None, Some(&set_b)).unwrap_err(),
        InvalidSetError::MissingSet
    );
    assert_eq!(
        generator.generate(Some(&set_b), None).unwrap_err(),
        InvalidSetError::MissingSet
    );
    assert_eq!(
        generator.generate(None, None).unwrap_err(),
        InvalidSetError::MissingSet
    );
}

#[test]
fn test_generate_names_the_empty_set() {
    let generator = ProductGenerator::new();
    let set = elements(&["1"], "A");

    let error_a = generator.generate(Some(&[]), Some(&set)).unwrap_err();
    assert!(error_a.to_string().contains("Set A"));

    let error_b = generator.generate(Some(&set), Some(&[])).unwrap_err();
    assert!(error_b.to_string().contains("Set B"));
}

#[test]
fn test_cardinality_is_zero_for_missing_sets() {
    // Unlike generate, cardinality treats absent input as zero. The
    // asymmetry is intentional, documented behavior.
    let generator = ProductGenerator::new();
    let set_b = elements(&["1", "2"], "B");

    assert_eq!(generator.cardinality(None, Some(&set_b)), 0);
    assert_eq!(generator.cardinality(Some(&set_b), None), 0);
    assert_eq!(generator.cardinality(None, None), 0);
}

#[test]
fn test_contains_pair() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["1", "2"], "A");
    let set_b = elements(&["x", "y"], "B");
    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();

    assert!(generator.contains_pair(&product, "2", "x"));
    assert!(!generator.contains_pair(&product, "x", "2"));
    assert!(!generator.contains_pair(&product, "3", "x"));
}

#[test]
fn test_filter_numeric_preserves_order() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["1", "apple", "2"], "A");
    let set_b = elements(&["3", "x"], "B");
    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();

    let numeric = generator.filter_numeric(&product);
    let rendered: Vec<String> = numeric.iter().map(|pair| pair.to_string()).collect();
    assert_eq!(rendered, vec!["(1, 3)", "(2, 3)"]);
    assert!(numeric.iter().all(|pair| pair.is_numeric_pair()));
}

#[test]
fn test_statistics_single_pass_counts() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["1", "apple"], "A");
    let set_b = elements(&["2", "x"], "B");
    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();

    let statistics = generator.statistics(&product);
    assert_eq!(statistics.total_pairs, 4);
    assert_eq!(statistics.numeric_pairs, 1);
    assert_eq!(statistics.non_numeric_pairs, 3);
}

#[test]
fn test_statistics_display_block() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["1"], "A");
    let set_b = elements(&["2"], "B");
    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();

    let rendered = generator.statistics(&product).to_string();
    assert_eq!(
        rendered,
        "Total pairs: 1\nNumeric pairs: 1\nNon-numeric pairs: 0"
    );
}

#[test]
fn test_numeric_pair_derivations_through_product() {
    let generator = ProductGenerator::new();
    let set_a = elements(&["3"], "A");
    let set_b = elements(&["4"], "B");
    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();

    let pair = &product[0];
    assert!(pair.is_numeric_pair());
    assert_eq!(pair.sum(), Some(7.0));
    assert_eq!(pair.product(), Some(12.0));
}

#[test]
fn test_generate_accepts_parser_output() {
    let parser = SetParser::new();
    let generator = ProductGenerator::new();

    let set_a = parser.parse_set("{1, 2, 3}", "A").unwrap();
    let set_b = parser.parse_set("x, y", "B").unwrap();

    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();
    assert_eq!(product.len(), 6);
    assert_eq!(product[0].detailed(), "(1 ∈ A, x ∈ B)");
}

#[test]
fn test_duplicates_multiply_through_the_product() {
    let parser = SetParser::new();
    let generator = ProductGenerator::new();

    let set_a = parser.parse_set("1,1", "A").unwrap();
    let set_b = parser.parse_set("x", "B").unwrap();

    let product = generator.generate(Some(&set_a), Some(&set_b)).unwrap();
    let rendered: Vec<String> = product.iter().map(|pair| pair.to_string()).collect();
    assert_eq!(rendered, vec!["(1, x)", "(1, x)"]);
}
