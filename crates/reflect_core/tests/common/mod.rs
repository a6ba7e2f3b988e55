//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const HEADERS: [&str; 3] = ["Transform.h", "Physics.h", "Position.h"];

pub fn write_headers(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for header in HEADERS {
        fs::write(dir.join(header), "#pragma once\n").unwrap();
    }
}

/// Doxygen-format XML describing the headers in `source_dir`.
pub fn write_fixture_xml(dir: &Path, source_dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("namespacehect.xml"), namespace_xml(source_dir)).unwrap();
    fs::write(dir.join("classhect_1_1Transform.xml"), classes_xml(source_dir)).unwrap();
}

pub fn namespace_xml(input: &Path) -> String {
    format!(
        r#"<?xml version="1.0"?>
<doxygen>
  <compounddef kind="namespace" id="namespacehect">
    <compoundname>hect</compoundname>
    <sectiondef kind="enum">
      <memberdef kind="enum" id="namespacehect_1aPosition" prot="public" strong="no">
        <name>Position</name>
        <enumvalue id="p1"><name>Position_X</name></enumvalue>
        <enumvalue id="p2"><name>Position_Y</name></enumvalue>
        <location file="{}/Position.h"/>
      </memberdef>
    </sectiondef>
  </compounddef>
</doxygen>
"#,
        input.display()
    )
}

pub fn classes_xml(input: &Path) -> String {
    let input = input.display();
    format!(
        r#"<?xml version="1.0"?>
<doxygen>
  <compounddef kind="class" id="classhect_1_1Transform" prot="public">
    <compoundname>hect::Transform</compoundname>
    <basecompoundref prot="public">Component&lt; Transform &gt;</basecompoundref>
    <detaileddescription><para>\component</para><para>[component]</para></detaileddescription>
    <sectiondef kind="public-attrib">
      <memberdef kind="variable" id="t1" prot="public">
        <type><ref refid="namespacehect_1aPosition">Position</ref></type>
        <name>anchor</name>
        <briefdescription><para>[property]{{required}}</para></briefdescription>
      </memberdef>
    </sectiondef>
    <location file="{input}/Transform.h"/>
  </compounddef>
  <compounddef kind="class" id="classhect_1_1Physics" prot="public">
    <compoundname>hect::Physics</compoundname>
    <basecompoundref prot="public">System&lt; Physics &gt;</basecompoundref>
    <location file="{input}/Physics.h"/>
  </compounddef>
  <compounddef kind="class" id="classhect_1_1Pool" prot="public">
    <compoundname>hect::Pool</compoundname>
    <templateparamlist><param><type>typename T</type></param></templateparamlist>
    <location file="{input}/Physics.h"/>
  </compounddef>
</doxygen>
"#
    )
}

pub fn set_mtime(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}


/// A stand-in `doxygen` that reads its Doxyfile the way Doxygen does:
/// paths are resolved against the working directory it is started in.
/// It copies the Doxyfile into `record_dir` and the fixture XML into
/// `OUTPUT_DIRECTORY/XML_OUTPUT`.
#[cfg(unix)]
pub fn stub_doxygen(dir: &Path, fixture_dir: &Path, record_dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
set -e
config="$1"
if [ ! -f "$config" ]; then
    echo "cannot open config '$config' from $(pwd)" >&2
    exit 1
fi
input=$(sed -n 's/^INPUT = "\(.*\)"$/\1/p' "$config")
output=$(sed -n 's/^OUTPUT_DIRECTORY = "\(.*\)"$/\1/p' "$config")
xml=$(sed -n 's/^XML_OUTPUT = \(.*\)$/\1/p' "$config")
if [ ! -d "$input" ]; then
    echo "cannot open input '$input' from $(pwd)" >&2
    exit 1
fi
cp "$config" "{record}/Doxyfile"
mkdir -p "$output/$xml"
cp "{fixtures}"/*.xml "$output/$xml/"
"#,
        record = record_dir.display(),
        fixtures = fixture_dir.display(),
    );

    let path = dir.join("doxygen");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
