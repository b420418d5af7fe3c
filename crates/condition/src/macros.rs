/// Builds a field map condition.
///
/// `field_map!(And; "name" => "Bob", "status" => "A")`
#[macro_export]
macro_rules! field_map {
    ($op:ident; $($field:expr => $value:expr),* $(,)?) => {
        {
            let fields: ::std::vec::Vec<(::std::string::String, $crate::model::core::value::Value)> =
                vec![$(($field.to_string(), $crate::model::core::value::Value::from($value))),*];
            $crate::ast::Condition::field_map($crate::ast::operator::Operator::$op, fields)
        }
    };
}

/// Builds a raw clause, with `format!` arguments.
#[macro_export]
macro_rules! raw {
    ($($arg:tt)+) => {
        $crate::ast::Condition::raw(format!($($arg)+))
    };
}
