/// Declare a record type: its columns, their text formats, NA sentinels, SQL types, setter
/// limits, keys and binary byte budget.
///
/// Each field line reads
/// `name, setter, NA_CONST: Type = na, "format", SqlType, Limit;`
/// where `Type` is `i64`, `f64` or `String` (whose NA constant is a `&'static str`). Numeric
/// setters take the field type itself; text setters take anything `Into<String>`.
///
/// ```
/// use kb_columns::{define_table, Limit, SqlType};
///
/// define_table! {
///     /// Free-form comments.
///     pub struct Note {
///         table: "note",
///         max_bytes: 64,
///         primary_key: [noteid],
///         unique_key: [],
///         fields: {
///             noteid, set_noteid, NOTEID_NA: i64 = -1, "%d", SqlType::Number(9), Limit::Below(1_000_000_000);
///             text, set_text, TEXT_NA: String = "-", "%s", SqlType::Varchar2(40), Limit::MaxLen(40);
///         }
///     }
/// }
///
/// let mut note = Note::default();
/// assert_eq!(note.noteid(), Note::NOTEID_NA);
/// note.set_noteid(7).unwrap().set_text("hello").unwrap();
/// assert_eq!(note.to_string(), "7 hello");
/// assert!(note.set_noteid(1_000_000_000).is_err());
/// ```
#[macro_export]
macro_rules! define_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            table: $table:literal,
            max_bytes: $max_bytes:expr,
            primary_key: [$($pk:ident),* $(,)?],
            unique_key: [$($uk:ident),* $(,)?],
            fields: {
                $(
                    $(#[$field_meta:meta])*
                    $field:ident, $setter:ident, $na_const:ident : $ty:ident = $na:expr,
                        $format:literal, $sql:expr, $limit:expr;
                )+
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            $($field: $ty,)+
            digest: $crate::DigestCache,
        }

        impl $name {
            $(
                pub const $na_const: <$ty as $crate::FieldValue>::Na = $na;
            )+

            /// Build a row from every field value, in declaration order. Limits are not
            /// checked here.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: $crate::__field_arg!($ty)),+) -> Self {
                Self {
                    $($field: ::std::convert::Into::into($field),)+
                    digest: $crate::DigestCache::default(),
                }
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> <$ty as $crate::FieldValue>::Ref<'_> {
                    $crate::FieldValue::field_ref(&self.$field)
                }

                pub fn $setter(
                    &mut self,
                    value: $crate::__field_arg!($ty),
                ) -> $crate::Result<&mut Self> {
                    let value: $ty = ::std::convert::Into::into(value);
                    $crate::Row::set_value(
                        self,
                        stringify!($field),
                        $crate::FieldValue::into_value(value),
                    )?;
                    Ok(self)
                }
            )+
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($field: <$ty as $crate::FieldValue>::from_na(Self::$na_const),)+
                    digest: $crate::DigestCache::default(),
                }
            }
        }

        impl $crate::Row for $name {
            fn schema() -> &'static $crate::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<$crate::Schema<$name>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::Schema::builder($table)
                        $(
                            .column(
                                $crate::ColumnSpec::new(
                                    stringify!($field),
                                    <$ty as $crate::FieldValue>::KIND,
                                    $format,
                                )
                                .na(<$ty as $crate::FieldValue>::na_value($name::$na_const))
                                .sql_type($sql)
                                .limit($limit),
                                |row: &$name| $crate::FieldValue::to_value(&row.$field),
                                |row: &mut $name, value: $crate::Value| {
                                    match <$ty as $crate::FieldValue>::from_value(value) {
                                        Some(value) => {
                                            row.$field = value;
                                            true
                                        }
                                        None => false,
                                    }
                                },
                            )
                        )+
                        .primary_key(&[$(stringify!($pk)),*])
                        .unique_key(&[$(stringify!($uk)),*])
                        .max_bytes($max_bytes)
                        .build()
                        .expect(concat!("column declarations of `", $table, "` are valid"))
                })
            }

            fn digest_cache(&self) -> &$crate::DigestCache {
                &self.digest
            }

            fn digest_cache_mut(&mut self) -> &mut $crate::DigestCache {
                &mut self.digest
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }

        /// Equality of every field, bit for bit (NaN sentinels compare equal).
        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::Row::content_digest(self) == $crate::Row::content_digest(other)
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&$crate::Row::content_digest(self), state);
            }
        }

        /// The row as one text line, in declaration order.
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::text::encode_canonical(self))
            }
        }
    };
}

/// Argument type of a generated constructor or setter for a field of type `$ty`.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_arg {
    (String) => { impl ::std::convert::Into<::std::string::String> };
    ($ty:ident) => { $ty };
}
