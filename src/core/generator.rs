use std::iter::FusedIterator;

use crate::domain::model::{OrderedPair, ProductStatistics, SetElement};
use crate::utils::error::{InvalidSetError, Result};

/// Computes `A × B` and its derived queries. Stateless; freely reusable.
///
/// Inputs are `Option` slices so the absent-versus-empty distinction stays
/// observable: [`ProductGenerator::generate`] fails on both, while
/// [`ProductGenerator::cardinality`] returns 0 for absent input. The
/// asymmetry is deliberate, documented behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductGenerator;

impl ProductGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the full Cartesian product in row-major order: all pairs for
    /// `a[0]` precede all pairs for `a[1]`, so `result[i * |B| + j]` is
    /// `(a[i], b[j])`. The ordering is part of the contract.
    pub fn generate(
        &self,
        set_a: Option<&[SetElement]>,
        set_b: Option<&[SetElement]>,
    ) -> Result<Vec<OrderedPair>> {
        let (set_a, set_b) = validate_sets(set_a, set_b)?;

        let mut product = Vec::with_capacity(set_a.len() * set_b.len());
        for element_a in set_a {
            for element_b in set_b {
                product.push(OrderedPair::new(element_a.clone(), element_b.clone()));
            }
        }

        Ok(product)
    }

    /// Lazy form of [`ProductGenerator::generate`]: same validation, same
    /// row-major order, pairs produced on demand. Collecting the iterator
    /// yields a sequence identical to the eager result.
    pub fn pairs<'a>(
        &self,
        set_a: Option<&'a [SetElement]>,
        set_b: Option<&'a [SetElement]>,
    ) -> Result<Pairs<'a>> {
        let (set_a, set_b) = validate_sets(set_a, set_b)?;

        Ok(Pairs {
            set_a,
            set_b,
            index_a: 0,
            index_b: 0,
        })
    }

    /// `|A| × |B|`, or 0 when either side is absent. Does not error on
    /// absent input, unlike [`ProductGenerator::generate`]; the asymmetry is
    /// preserved as documented behavior.
    pub fn cardinality(
        &self,
        set_a: Option<&[SetElement]>,
        set_b: Option<&[SetElement]>,
    ) -> usize {
        match (set_a, set_b) {
            (Some(set_a), Some(set_b)) => set_a.len() * set_b.len(),
            _ => 0,
        }
    }

    /// Order-preserving subsequence of pairs whose members both coerce to
    /// numbers.
    pub fn filter_numeric(&self, product: &[OrderedPair]) -> Vec<OrderedPair> {
        product
            .iter()
            .filter(|pair| pair.is_numeric_pair())
            .cloned()
            .collect()
    }

    /// True iff some pair matches both values by raw text equality.
    pub fn contains_pair(&self, product: &[OrderedPair], first: &str, second: &str) -> bool {
        product
            .iter()
            .any(|pair| pair.first().value() == first && pair.second().value() == second)
    }

    /// Single-pass counters over a generated product.
    pub fn statistics(&self, product: &[OrderedPair]) -> ProductStatistics {
        let numeric_pairs = product
            .iter()
            .filter(|pair| pair.is_numeric_pair())
            .count();

        ProductStatistics {
            total_pairs: product.len(),
            numeric_pairs,
            non_numeric_pairs: product.len() - numeric_pairs,
        }
    }
}

fn validate_sets<'a>(
    set_a: Option<&'a [SetElement]>,
    set_b: Option<&'a [SetElement]>,
) -> Result<(&'a [SetElement], &'a [SetElement])> {
    let (Some(set_a), Some(set_b)) = (set_a, set_b) else {
        return Err(InvalidSetError::MissingSet);
    };

    if set_a.is_empty() {
        return Err(InvalidSetError::EmptySet {
            set_name: "A".to_string(),
        });
    }

    if set_b.is_empty() {
        return Err(InvalidSetError::EmptySet {
            set_name: "B".to_string(),
        });
    }

    Ok((set_a, set_b))
}

/// Row-major streaming iterator over a validated product. Construction goes
/// through [`ProductGenerator::pairs`], so both slices are non-empty.
pub struct Pairs<'a> {
    set_a: &'a [SetElement],
    set_b: &'a [SetElement],
    index_a: usize,
    index_b: usize,
}

impl Iterator for Pairs<'_> {
    type Item = OrderedPair;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index_a >= self.set_a.len() {
            return None;
        }

        let pair = OrderedPair::new(
            self.set_a[self.index_a].clone(),
            self.set_b[self.index_b].clone(),
        );

        self.index_b += 1;
        if self.index_b == self.set_b.len() {
            self.index_b = 0;
            self.index_a += 1;
        }

        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.set_a.len() - self.index_a) * self.set_b.len() - self.index_b;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl FusedIterator for Pairs<'_> {}
