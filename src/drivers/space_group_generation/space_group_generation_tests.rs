use serial_test::serial;

use crate::drivers::space_group_generation::{
    SpaceGroupGenerationDriver, SpaceGroupGenerationParams, SpaceGroupGenerationResult,
};
use crate::drivers::XtalSymDriver;
use crate::io::{read_xtalsym_binary, XtalSymFileType};

#[test]
fn test_drivers_space_group_generation_params() {
    let params = SpaceGroupGenerationParams::builder()
        .symbol("P21/c")
        .build()
        .unwrap();
    assert!(params.normalise_operations);
    assert!(!params.describe_operations);
    assert!(params.unit_cell.is_none());

    assert!(SpaceGroupGenerationParams::builder()
        .symbol("  ")
        .build()
        .is_err());
    assert!(SpaceGroupGenerationParams::builder().build().is_err());
    assert!(SpaceGroupGenerationParams::builder()
        .symbol("P 1")
        .unit_cell(Some([0.0, 1.0, 1.0, 90.0, 90.0, 90.0]))
        .build()
        .is_err());
}

#[test]
fn test_drivers_space_group_generation_p21c() {
    let params = SpaceGroupGenerationParams::builder()
        .symbol("P21/c")
        .write_seitz_matrices(true)
        .describe_operations(true)
        .build()
        .unwrap();
    let mut driver = SpaceGroupGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    assert!(driver.result().is_err());
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.space_group.name, "-P 2ybc [P 1 21/c 1] #14");
    assert_eq!(res.space_group.intl_table_number, "14:b1");
    assert_eq!(
        res.space_group.operations,
        vec!["x,y,z", "-x,y+1/2,-z+1/2", "-x,-y,-z", "x,-y+1/2,z+1/2"]
    );
    assert_eq!(res.seitz_matrices.as_ref().unwrap().len(), 4);
    let labels = res.operation_descriptions.as_ref().unwrap();
    assert_eq!(labels[0], "identity");
    assert_eq!(labels[2], "inversion center|0 0 0");

    let output = res.to_string();
    assert!(output.contains("Number of operations: 4"));
    assert!(output.contains("> identity"));
}

#[test]
fn test_drivers_space_group_generation_monoclinic_cell() {
    // The cell picks the unique-axis-a setting of an ambiguous short name.
    let params = SpaceGroupGenerationParams::builder()
        .symbol("P21/c")
        .unit_cell(Some([5.0, 6.0, 7.0, 100.0, 90.0, 90.0]))
        .build()
        .unwrap();
    let mut driver = SpaceGroupGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.space_group.operation_count, 4);
    assert_eq!(res.space_group.intl_table_number, "14:a3");
}

#[test]
fn test_drivers_space_group_generation_unknown_symbol() {
    let params = SpaceGroupGenerationParams::builder()
        .symbol("nonsense")
        .build()
        .unwrap();
    let mut driver = SpaceGroupGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    assert!(driver.run().is_err());
    assert!(driver.result().is_err());
}

#[test]
#[serial]
fn test_drivers_space_group_generation_save() {
    let name = std::env::temp_dir()
        .join("xtalsym_driver_test_fd3m")
        .to_string_lossy()
        .to_string();
    let params = SpaceGroupGenerationParams::builder()
        .symbol("Fd-3m")
        .normalise_operations(false)
        .result_save_name(Some(name.clone()))
        .build()
        .unwrap();
    let mut driver = SpaceGroupGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.space_group.operation_count, 192);

    let read: SpaceGroupGenerationResult =
        read_xtalsym_binary(&name, XtalSymFileType::Sgr).unwrap();
    assert_eq!(read.space_group, res.space_group);
    assert_eq!(read.parameters, params);
}
