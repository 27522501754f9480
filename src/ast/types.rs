use std::fmt::Display;

/// The primitive type keywords of TinyC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseKind {
    Char,
    Int,
    Void,
}

impl Display for BaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            BaseKind::Char => "char",
            BaseKind::Int => "int",
            BaseKind::Void => "void",
        };
        write!(f, "{}", keyword)
    }
}

/// A TinyC type.
///
/// Pointer chains nest right-to-left as `*` tokens are consumed left to
/// right, so `char**` is `Pointer(Pointer(Base(char)))`. Parameter
/// names are not part of a function type, only of a definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Base {
        kind: BaseKind,
    },
    Pointer {
        points_to: Box<Type>,
    },
    Function {
        return_type: Box<Type>,
        parameters: Vec<Type>,
    },
}

impl Type {
    /// Number of `Pointer` layers wrapping the underlying type.
    pub fn indirection(&self) -> usize {
        match self {
            Type::Pointer { points_to } => 1 + points_to.indirection(),
            _ => 0,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Base { kind } => write!(f, "Type_{}", kind),
            Type::Pointer { points_to } => write!(f, "Pointer_[{}]", points_to),
            Type::Function {
                return_type,
                parameters,
            } => {
                write!(f, "Function_[{}", return_type)?;
                for parameter in parameters {
                    write!(f, ",{}", parameter)?;
                }
                write!(f, "]")
            }
        }
    }
}
