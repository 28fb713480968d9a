use std::collections::{BTreeSet, HashMap};

use kadsel::{
    jvm::method::{MethodEntry, MethodRecord},
    types::method_descriptor::{Error, MethodDescriptor, RawDescriptor},
};
use rayon::prelude::*;

/// Methods of a made-up class, as a class file reader would report them.
fn render_global_methods() -> Vec<MethodEntry> {
    vec![
        MethodEntry::new("<clinit>", "()V"),
        MethodEntry::new("<init>", "(Lnet/minecraft/client/Minecraft;)V"),
        MethodEntry::new(
            "spawnParticle",
            "(Lnet/minecraft/util/EnumParticleTypes;DDDDDD[I)V",
        ),
        MethodEntry::new(
            "spawnParticle",
            "(Lnet/minecraft/util/EnumParticleTypes;ZDDDDDD[I)V",
        ),
        MethodEntry::new("renderSky", "(FI)V"),
        MethodEntry::new("getViewVector", "(Lnet/minecraft/entity/Entity;D)[[F"),
    ]
}

#[test]
fn locate_overload() {
    let methods = render_global_methods();
    let target = MethodDescriptor::parse_from_full_path(
        "spawnParticle(Lnet/minecraft/util/EnumParticleTypes;ZDDDDDD[I)V",
    )
    .unwrap();
    let found = target.find_match(&methods).unwrap();
    assert_eq!(found.descriptor(), target.full_descriptor());
    assert_eq!(target.parameter_count(), 9);
}

#[test]
fn locate_initializers() {
    let methods = render_global_methods();
    let clinit = MethodDescriptor::parse_from_full_name("<clinit>()V").unwrap();
    let init =
        MethodDescriptor::parse_from_full_name("<init>(Lnet/minecraft/client/Minecraft;)V")
            .unwrap();
    assert_eq!(clinit.find_match(&methods), Some(&methods[0]));
    assert_eq!(init.find_match(&methods), Some(&methods[1]));
}

#[test]
fn every_entry_is_a_valid_descriptor() {
    for entry in render_global_methods() {
        let full_name = format!("{}{}", entry.name(), entry.descriptor());
        let strict = MethodDescriptor::parse_from_full_path(&full_name).unwrap();
        let split = MethodDescriptor::parse_from_full_name(&full_name).unwrap();
        assert_eq!(strict, split);
        assert!(strict.matches(&entry));
        assert_eq!(strict.to_string(), full_name);
    }
}

#[test]
fn descriptors_as_map_keys() {
    let patches: HashMap<MethodDescriptor, &str> = [
        ("renderSky(FI)V", "skip clouds"),
        ("getViewVector(Lnet/minecraft/entity/Entity;D)[[F", "fixed fov"),
    ]
    .into_iter()
    .map(|(descriptor, patch)| (descriptor.parse().unwrap(), patch))
    .collect();

    let applied: BTreeSet<_> = render_global_methods()
        .iter()
        .filter_map(|entry| {
            let key = MethodDescriptor::new(
                entry.name(),
                entry
                    .descriptor()
                    .trim_start_matches('(')
                    .split_once(')')?
                    .0,
                entry.descriptor().split_once(')')?.1,
            )
            .ok()?;
            patches.get(&key).copied()
        })
        .collect();
    assert_eq!(applied, BTreeSet::from(["fixed fov", "skip clouds"]));
}

#[test]
fn concurrent_reads() {
    let descriptors: Vec<_> = render_global_methods()
        .iter()
        .map(|it| format!("{}{}", it.name(), it.descriptor()))
        .map(|it| MethodDescriptor::parse_from_full_path(&it).unwrap())
        .collect();
    let methods = render_global_methods();
    (0..1024).into_par_iter().for_each(|i| {
        let descriptor = &descriptors[i % descriptors.len()];
        assert_eq!(descriptor.find_match(&methods), Some(&methods[i % methods.len()]));
        assert!(descriptor.argument_list().iter().all(|it| !it.is_empty()));
    });
}

#[test]
fn errors_are_distinguishable() {
    let cases = [
        ("foo(I)", Error::MalformedDescriptor("foo(I)".to_owned())),
        (
            "bad.name()V",
            Error::MalformedName(RawDescriptor {
                name: "bad.name".to_owned(),
                args: String::new(),
                return_type: "V".to_owned(),
            }),
        ),
        (
            "<clinit>(I)V",
            Error::MalformedName(RawDescriptor {
                name: "<clinit>".to_owned(),
                args: "I".to_owned(),
                return_type: "V".to_owned(),
            }),
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(MethodDescriptor::parse_from_full_path(input), Err(expected));
    }
    assert!(matches!(
        MethodDescriptor::new("ok", "", "X"),
        Err(Error::MalformedReturnType(_))
    ));
    assert!(matches!(
        MethodDescriptor::new("ok", "Lfoo/Bar", "V"),
        Err(Error::MalformedArgument { index: 0, .. })
    ));
}
