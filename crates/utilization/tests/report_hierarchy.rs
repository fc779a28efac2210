use anyhow::Result;
use std::fs;
use vrt_utilization::{parse_report, read_report, render_table, to_xml_string, write_xml, ReportError};

const VIVADO_STYLE: &str = r#"Copyright 1986-2022 Xilinx, Inc. All Rights Reserved.
---------------------------------------------------------------------------------
| Tool Version : Vivado v.2024.1
| Design       : top_wrapper
---------------------------------------------------------------------------------

1. Utilization by Hierarchy
---------------------------

+------------------+-------------+------------+------------+---------+------+-------+--------+--------+------+------------+
|     Instance     |    Module   | Total LUTs | Logic LUTs | LUTRAMs | SRLs |  FFs  | RAMB36 | RAMB18 | URAM | DSP Blocks |
+------------------+-------------+------------+------------+---------+------+-------+--------+--------+------+------------+
| top_wrapper      |       (top) |     12,345 |     10,000 |     100 |   45 | 9,876 |     12 |      3 |    2 |         16 |
|   top_i          |         top |     12,000 |      9,800 |      99 |   45 | 9,800 |     12 |      3 |    2 |         16 |
|     axi_noc_0    |   axi_noc_0 |          0 |          0 |       0 |    0 |     0 |      0 |      0 |    0 |          0 |
|     cips         |        cips |         10 |         10 |       0 |    0 |    12 |      - |      0 |    0 |          0 |
|       inner      |   cips_core |          5 |          5 |       0 |    0 |     6 |      0 |      0 |    0 |          0 |
|   debug_hub      |   dbg_hub   |        345 |        200 |       1 |    0 |    76 |      0 |      0 |    0 |          0 |
+------------------+-------------+------------+------------+---------+------+-------+--------+--------+------+------------+
* Note: trailing notes are outside the table
"#;

#[test]
fn vivado_style_table_builds_expected_tree() {
    let report = parse_report(VIVADO_STYLE);
    assert_eq!(report.instances.len(), 2);
    let top = &report.instances[1];
    assert_eq!(top.name(), "top_wrapper");
    assert_eq!(top.instance.module, "(top)");
    assert_eq!(top.instance.total_luts, "12,345");

    let names: Vec<&str> = top.children.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["top_i", "debug_hub"]);

    let top_i = &top.children[0];
    let names: Vec<&str> = top_i.children.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["axi_noc_0", "cips"]);
    assert_eq!(top_i.children[1].children[0].name(), "inner");
    assert_eq!(top_i.children[1].instance.ramb36, "-");
    assert_eq!(report.instance_count(), 7);
}

#[test]
fn full_width_header_row_becomes_leading_instance() {
    let report = parse_report(VIVADO_STYLE);
    let shape: Vec<(usize, &str)> = report.iter().map(|(d, n)| (d, n.name())).collect();
    assert_eq!(
        shape,
        vec![
            (1, "Instance"),
            (1, "top_wrapper"),
            (2, "top_i"),
            (3, "axi_noc_0"),
            (3, "cips"),
            (4, "inner"),
            (2, "debug_hub"),
        ]
    );
    let header = &report.instances[0];
    assert_eq!(header.instance.module, "Module");
    assert_eq!(header.instance.total_luts, "Total LUTs");
    assert_eq!(header.instance.dsp_blocks, "DSP Blocks");
    assert!(header.children.is_empty());
}

#[test]
fn no_border_yields_empty_report() -> Result<()> {
    let report = parse_report("| a | b | c | d | e | f | g | h | i | j | k |\nplain text\n");
    assert!(report.is_empty());
    let xml = to_xml_string(&report)?;
    assert!(xml.contains("<UtilizationReport/>"), "xml={xml}");
    Ok(())
}

#[test]
fn concrete_two_row_scenario() -> Result<()> {
    let text = "+---+\n| A | modA | 10 | 5 | 0 | 0 | 5 | 0 | 0 | 0 | 0 | extra | extra |\n|  B | modB | 2 | 1 | 0 | 0 | 1 | 0 | 0 | 0 | 0 | extra | extra |\n+---+";
    let report = parse_report(text);
    let a = &report.instances[0];
    assert_eq!(a.name(), "A");
    assert_eq!(a.instance.total_luts, "10");
    assert_eq!(a.children.len(), 1);
    assert_eq!(a.children[0].name(), "B");
    assert_eq!(a.children[0].instance.total_luts, "2");

    let xml = to_xml_string(&report)?;
    assert!(xml.contains("<TotalLUTs>10</TotalLUTs>"), "xml={xml}");
    assert!(xml.contains("<TotalLUTs>2</TotalLUTs>"), "xml={xml}");
    Ok(())
}

#[test]
fn rendered_table_reparses_to_same_shape() {
    let first = parse_report(VIVADO_STYLE);
    let dump = render_table(&first);
    let second = parse_report(&dump);
    assert_eq!(first, second);
    assert_eq!(render_table(&second), dump);
}

#[test]
fn counters_are_preserved_verbatim() -> Result<()> {
    let report = parse_report(VIVADO_STYLE);
    let xml = to_xml_string(&report)?;
    assert!(xml.contains("<TotalLUTs>12,345</TotalLUTs>"), "xml={xml}");
    assert!(xml.contains("<FFs>9,876</FFs>"), "xml={xml}");
    assert!(xml.contains("<RAMB36>-</RAMB36>"), "xml={xml}");
    Ok(())
}

#[test]
fn read_and_write_through_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("utilization_hierarchical.rpt");
    fs::write(&input, VIVADO_STYLE)?;
    let out = dir.path().join("utilization_report.xml");

    let report = read_report(&input)?;
    write_xml(&report, &out)?;
    let xml = fs::read_to_string(&out)?;
    assert!(xml.contains("<Name>debug_hub</Name>"), "xml={xml}");
    Ok(())
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_report(dir.path().join("absent.rpt")).unwrap_err();
    assert!(matches!(err, ReportError::Read { .. }), "err={err}");
}

#[test]
fn missing_output_directory_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("build").join("utilization_report.xml");
    let err = write_xml(&parse_report(VIVADO_STYLE), &out).unwrap_err();
    assert!(matches!(err, ReportError::Write { .. }), "err={err}");
    assert!(!out.exists());
}
