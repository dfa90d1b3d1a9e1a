use prune_core::VendorEntry;

/// Receives each planned removal before it is carried out.
pub trait PruneReporter {
    fn removing(&self, entry: &VendorEntry);
}
