use proptest::prelude::*;

use crate::types::field_type::PrimitiveType;

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident = prop::string::string_regex(r"[a-zA-Z][\w\$_]*").expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..10).prop_map(|v| v.join("/"))
}

pub(crate) fn arb_method_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z_\$][\w\$]*").expect("The regex is invalid")
}

pub(crate) fn arb_non_array_type_descriptor() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(|it| it.descriptor().to_string()),
        arb_class_name().prop_map(|it| format!("L{it};")),
    ]
}

prop_compose! {
    fn arb_array_type_descriptor()(
        element in arb_non_array_type_descriptor(),
        dim in 1..=u8::MAX
    ) -> String {
        format!("{}{element}", "[".repeat(usize::from(dim)))
    }
}

pub(crate) fn arb_type_descriptor() -> impl Strategy<Value = String> {
    prop_oneof![arb_non_array_type_descriptor(), arb_array_type_descriptor()]
}

pub(crate) fn arb_return_type() -> impl Strategy<Value = String> {
    prop_oneof![Just("V".to_owned()), arb_type_descriptor()]
}
