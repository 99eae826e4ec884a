//! Integration tests for derive macros.
//!
//! These tests verify that the derive and attribute macros compile and
//! produce correct descriptors.

use seedforge::prelude::*;

/// The canonical seeded shape: private storage, public getters.
#[derive(Debug, PartialEq, SeedEntity)]
pub struct Foo {
    id: Uuid,
    name: String,
}

impl Foo {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A shape with a renamed field and an explicit identifier field.
#[seed_entity]
pub struct Country {
    #[seed(id)]
    key: Uuid,
    #[seed(rename = "isoCode")]
    iso_code: String,
    population: Option<u64>,
}

#[test]
fn test_derived_descriptor() {
    let descriptor = Foo::descriptor();

    assert_eq!(descriptor.qualified_name, "derive_macros::Foo");
    assert_eq!(descriptor.id_field, "id");
    assert_eq!(descriptor.field_count(), 2);
    assert_eq!(
        descriptor.find_field("name").unwrap().type_name(),
        "alloc::string::String"
    );
}

#[test]
fn test_derived_constructor_zero_initializes() {
    let foo = Foo::descriptor().instantiate().unwrap();

    assert_eq!(foo.id(), Uuid::nil());
    assert_eq!(foo.name(), "");
}

#[test]
fn test_derived_setters_reach_private_fields() {
    let foo: Foo = copy(&seed_record! { name: "Foo 1" }).unwrap();
    assert_eq!(foo.name(), "Foo 1");
}

#[test]
fn test_seed_attributes() {
    let descriptor = Country::descriptor();

    assert_eq!(descriptor.id_field, "key");
    assert!(descriptor.find_field("isoCode").is_some());
    assert!(descriptor.find_field("iso_code").is_none());
    assert_eq!(
        descriptor.find_field("population").unwrap().type_name(),
        "core::option::Option<u64>"
    );
}

#[test]
fn test_attribute_macro_adds_derives() {
    let country = Country {
        key: Uuid::nil(),
        iso_code: "NZ".to_string(),
        population: Some(5_000_000),
    };

    // Clone, Debug and PartialEq come from #[seed_entity].
    assert_eq!(country.clone(), country);
    assert!(format!("{:?}", country).contains("NZ"));
}

#[test]
fn test_rename_only_affects_matching() {
    let record = seed_record! { isoCode: "NZ" };
    let country: Country = copy(&record).unwrap();
    assert_eq!(country.iso_code, "NZ");

    // Same field types and values under a different seed name hash the same.
    let components = id_components(&country);
    let expected = string_hash("uuid::Uuid")
        ^ string_hash("alloc::string::String")
        ^ string_hash("core::option::Option<u64>");
    assert_eq!(components.field_type_hash, expected);
}

#[test]
fn ui_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass_*.rs");
}

#[test]
fn ui_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/fail_*.rs");
}
