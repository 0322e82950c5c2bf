use model::RegionCatalog;

/// Prints the region catalog, one `code  label` pair per line.
pub fn list_regions() {
    for region in RegionCatalog::standard().entries() {
        println!("{}  {}", region.code, region.label);
    }
}
