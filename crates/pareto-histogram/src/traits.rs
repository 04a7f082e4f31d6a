//! Core traits for bin count selection

/// Trait for rules that choose a histogram bin count from sample data
pub trait BinCountRule {
    /// Short name of the rule
    fn name(&self) -> &str;

    /// Bin count for the sample
    ///
    /// Non-finite values are ignored. Returns 0 when no finite value is left.
    fn bin_count(&self, sample: &[f64]) -> usize;
}

impl<R: BinCountRule + ?Sized> BinCountRule for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn bin_count(&self, sample: &[f64]) -> usize {
        (**self).bin_count(sample)
    }
}

impl<R: BinCountRule + ?Sized> BinCountRule for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn bin_count(&self, sample: &[f64]) -> usize {
        (**self).bin_count(sample)
    }
}
