use std::str::FromStr;

use crate::symmetry::hall_symbol::HallSymbol;
use crate::symmetry::space_group_catalog::{Ambiguity, SpaceGroupCatalog, SpaceGroupEntry};
use crate::symmetry::symmetry_error::SymmetryError;

fn resolved(name: &str, cell: Option<&[f64; 6]>) -> &'static SpaceGroupEntry {
    let catalog = SpaceGroupCatalog::get();
    let index = catalog
        .resolve(name, cell)
        .unwrap_or_else(|err| panic!("`{name}` not resolved: {err}"));
    catalog.entry(index).unwrap()
}

#[test]
fn test_space_group_catalog_entries() {
    let catalog = SpaceGroupCatalog::get();
    assert_eq!(catalog.len(), 593);
    assert!(!catalog.is_empty());

    let p1 = catalog.entry(0).unwrap();
    assert_eq!(p1.intl_table_number, "1");
    assert_eq!(p1.hall_symbol, "P 1");
    assert_eq!(p1.hm_symbol_full, "P 1");
    assert_eq!(p1.ambiguity, Ambiguity::None);
    assert_eq!(p1.name, "P 1 [P 1] #1");

    for (i, entry) in catalog.entries().iter().enumerate() {
        assert_eq!(entry.index, i);
    }
}

#[test]
fn test_space_group_catalog_entry_fields() {
    let p21c = resolved("14:b1", None);
    assert_eq!(p21c.intl_table_number_ext, "b1");
    assert_eq!(p21c.schoenflies, "c2h^5");
    assert_eq!(p21c.hm_symbol, "P 1 21/c 1");
    assert_eq!(p21c.hm_symbol_abbr, "P121/c1");
    assert_eq!(p21c.hm_symbol_abbr_short, "P21/c");
    assert_eq!(p21c.hall_symbol, "-P 2ybc");
    assert_eq!(p21c.ambiguity, Ambiguity::Axis { unique_axis: 'b' });

    let fd3m = resolved("227:1", None);
    assert_eq!(fd3m.hm_symbol_ext, "1");
    assert_eq!(fd3m.hm_symbol_with_ext(), "F d -3 m:1");
    assert_eq!(fd3m.ambiguity, Ambiguity::Origin);
    assert_eq!(fd3m.hm_symbol_alternative.as_deref(), Some("f d 3 m"));

    let r3 = resolved("146:h", None);
    assert_eq!(r3.ambiguity, Ambiguity::CellChoice { axis_choice: 'h' });

    let fm3m = resolved("225", None);
    assert_eq!(fm3m.hm_symbol_alternative.as_deref(), Some("f m 3 m"));
    assert_eq!(fm3m.hm_symbol_with_ext(), "F m -3 m");

    assert!(resolved("154", None).is_uncertain());
    assert!(!resolved("153", None).is_uncertain());
}

#[test]
fn test_space_group_catalog_every_hall_symbol_parses() {
    for entry in SpaceGroupCatalog::get().entries() {
        let hall = HallSymbol::from_str(&entry.hall_symbol)
            .unwrap_or_else(|err| panic!("{}: {err}", entry.name));
        assert!(hall.n_rotations() > 0, "{}", entry.name);
    }
}

#[test]
fn test_space_group_catalog_resolve_hall() {
    assert_eq!(resolved("P 1", None).intl_table_number, "1");
    assert_eq!(resolved("-P 1", None).intl_table_number, "2");
    assert_eq!(resolved("P 2 2", None).intl_table_number, "16");
    assert_eq!(resolved("-p 2ybc", None).intl_table_number_full, "14:b1");
    assert_eq!(resolved("hall:-P 2yn", None).intl_table_number_full, "14:b2");
    assert_eq!(
        resolved("-P 2ybc [P 1 21/c 1] #14", None).intl_table_number_full,
        "14:b1"
    );
}

#[test]
fn test_space_group_catalog_resolve_hermann_mauguin() {
    let p21c = resolved("P21/c", None);
    assert_eq!(p21c.intl_table_number, "14");
    assert_eq!(p21c.intl_table_number_ext, "b1");
    assert_eq!(p21c.hall_symbol, "-P 2ybc");

    assert_eq!(resolved("P 21/c", None).intl_table_number_full, "14:b1");
    assert_eq!(resolved("P_21/c", None).intl_table_number_full, "14:b1");
    assert_eq!(resolved("hm:P 1 21/c 1", None).intl_table_number_full, "14:b1");
    assert_eq!(resolved("P 1 21/n 1", None).intl_table_number_full, "14:b2");
    assert_eq!(resolved("P2/m:c", None).intl_table_number_full, "10:c");

    assert_eq!(resolved("Fm-3m", None).intl_table_number, "225");
    assert_eq!(resolved("F m 3 m", None).intl_table_number, "225");
    assert_eq!(resolved("Pm-3m", None).intl_table_number, "221");
}

#[test]
fn test_space_group_catalog_resolve_settings() {
    // Origin choice 2 by default.
    assert_eq!(resolved("Fd-3m", None).intl_table_number_full, "227:2");
    assert_eq!(resolved("Fd-3m:1", None).intl_table_number_full, "227:1");
    assert_eq!(resolved("F d -3 m:1", None).intl_table_number_full, "227:1");

    // Hexagonal axes by default.
    assert_eq!(resolved("R3", None).intl_table_number_full, "146:h");
    let r3r = resolved("R3:r", None);
    assert_eq!(r3r.intl_table_number_full, "146:r");
    assert_eq!(r3r.hall_symbol, "P 3*");

    // Unique axis from the cell metric.
    let monoclinic_b = [5.0, 6.0, 7.0, 90.0, 100.0, 90.0];
    assert_eq!(
        resolved("P21/c", Some(&monoclinic_b)).intl_table_number_full,
        "14:b1"
    );
    let monoclinic_a = [5.0, 6.0, 7.0, 100.0, 90.0, 90.0];
    assert_eq!(
        resolved("P21/c", Some(&monoclinic_a)).intl_table_number_full,
        "14:a3"
    );
}

#[test]
fn test_space_group_catalog_resolve_numbers() {
    assert_eq!(resolved("14", None).intl_table_number_full, "14:b1");
    assert_eq!(resolved("14:c2", None).hall_symbol, "-P 2n");
    assert_eq!(resolved("230", None).hall_symbol, "-I 4bd 2c 3");
}

#[test]
fn test_space_group_catalog_resolve_miss() {
    let catalog = SpaceGroupCatalog::get();
    for name in ["Q 99", "999", "14:z9", "", "P 21/q"] {
        assert!(
            matches!(catalog.resolve(name, None), Err(SymmetryError::LookupMiss(_))),
            "`{name}` should not resolve."
        );
    }
}

#[test]
fn test_space_group_catalog_resolve_all() {
    let catalog = SpaceGroupCatalog::get();
    let hits = catalog.resolve_all("P21/c", None);
    let settings = hits
        .iter()
        .map(|i| catalog.entry(*i).unwrap().intl_table_number_full.as_str())
        .collect::<Vec<_>>();
    assert_eq!(settings, vec!["14:b1", "14:b1", "14:a3"]);

    let hall_hits = catalog.resolve_all("hall:-P 2ybc", None);
    assert_eq!(hall_hits.len(), 2);
    assert!(hall_hits.windows(2).all(|w| w[0] < w[1]));

    assert!(catalog.resolve_all("Q 99", None).is_empty());
}

#[test]
fn test_space_group_catalog_ambiguous_names() {
    let catalog = SpaceGroupCatalog::get();
    assert!(catalog.is_ambiguous_name("P 21/c"));
    assert!(catalog.is_ambiguous_name("p 2"));
    assert!(!catalog.is_ambiguous_name("P 1"));
    assert!(!catalog.is_ambiguous_name("F m -3 m"));
}

#[test]
fn test_space_group_catalog_unique_axis() {
    let axis = SpaceGroupCatalog::determine_unique_axis;
    assert_eq!(axis(5.0, 5.0, 5.0, 90.0, 90.0, 90.0), None);
    assert_eq!(axis(5.0, 5.0, 7.0, 90.0, 90.0, 120.0), Some('c'));
    assert_eq!(axis(5.0, 6.0, 6.0, 90.0, 90.0, 90.0), Some('a'));
    assert_eq!(axis(6.0, 5.0, 6.0, 90.0, 90.0, 90.0), Some('b'));
    assert_eq!(axis(5.0, 6.0, 7.0, 90.0, 90.0, 90.0), None);
    assert_eq!(axis(5.0, 6.0, 7.0, 90.0, 90.0, 110.0), Some('c'));
    assert_eq!(axis(5.0, 6.0, 7.0, 110.0, 90.0, 90.0), Some('a'));
    assert_eq!(axis(5.0, 6.0, 7.0, 90.0, 110.0, 90.0), Some('b'));
    assert_eq!(axis(5.0, 6.0, 7.0, 80.0, 100.0, 110.0), None);
}
