use std::fmt::Display;

use crate::{lexer::tokens::Token, Position};

use super::{
    expressions::Expression,
    statements::Statement,
    types::{BaseKind, Type},
};

/// Tree-builder contract the parser drives.
///
/// The grammar recognizer never allocates nodes itself; it calls one
/// creation method per production. Any backend implementing this trait
/// (the [`Ast`] builder, a pretty-printer, a validator) reuses the
/// parser unmodified. Top-level items are registered as side effects
/// rather than returned.
pub trait AstFactory {
    type Expr;
    type Stmt;
    type Ty;

    fn create_primary_expression(&mut self, token: Token) -> Self::Expr;
    fn create_unary_expression(&mut self, operator: Token, postfix: bool, operand: Self::Expr)
        -> Self::Expr;
    fn create_binary_expression(&mut self, operator: Token, left: Self::Expr, right: Self::Expr)
        -> Self::Expr;
    fn create_call_expression(
        &mut self,
        token: Token,
        callee: Self::Expr,
        arguments: Vec<Self::Expr>,
    ) -> Self::Expr;
    fn create_conditional_expression(
        &mut self,
        token: Token,
        condition: Self::Expr,
        consequence: Self::Expr,
        alternative: Self::Expr,
    ) -> Self::Expr;

    fn create_block_statement(&mut self, loc: Position, statements: Vec<Self::Stmt>) -> Self::Stmt;
    fn create_declaration_statement(
        &mut self,
        ty: Self::Ty,
        name: Token,
        init: Option<Self::Expr>,
    ) -> Self::Stmt;
    fn create_expression_statement(&mut self, loc: Position, expression: Self::Expr) -> Self::Stmt;
    fn create_if_statement(
        &mut self,
        loc: Position,
        condition: Self::Expr,
        consequence: Self::Stmt,
        alternative: Option<Self::Stmt>,
    ) -> Self::Stmt;
    fn create_return_statement(&mut self, loc: Position, expression: Option<Self::Expr>)
        -> Self::Stmt;
    fn create_while_statement(
        &mut self,
        loc: Position,
        condition: Self::Expr,
        body: Self::Stmt,
    ) -> Self::Stmt;
    fn create_annotated_while_statement(
        &mut self,
        loc: Position,
        condition: Self::Expr,
        body: Self::Stmt,
        invariant: Self::Expr,
        term: Option<Self::Expr>,
        bound: Option<Token>,
    ) -> Self::Stmt;
    fn create_break_statement(&mut self, loc: Position) -> Self::Stmt;
    fn create_continue_statement(&mut self, loc: Position) -> Self::Stmt;
    fn create_assume_statement(&mut self, keyword: Token, condition: Self::Expr) -> Self::Stmt;
    fn create_assert_statement(&mut self, keyword: Token, condition: Self::Expr) -> Self::Stmt;

    fn create_base_type(&mut self, kind: BaseKind) -> Self::Ty;
    fn create_pointer_type(&mut self, points_to: Self::Ty) -> Self::Ty;
    fn create_function_type(&mut self, return_type: Self::Ty, parameters: Vec<Self::Ty>)
        -> Self::Ty;

    fn create_external_declaration(&mut self, ty: Self::Ty, name: Token);
    fn create_function_definition(
        &mut self,
        ty: Self::Ty,
        name: Token,
        parameter_names: Vec<Option<Token>>,
        body: Self::Stmt,
    );
}

/// A top-level variable or function prototype, no body.
#[derive(Debug, Clone)]
pub struct ExternalDeclaration {
    pub ty: Type,
    pub name: Token,
}

impl Display for ExternalDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Declaration_{}[{}]", self.name.value, self.ty)
    }
}

/// A function definition: its function type, the ordered parameter
/// names, and the body block.
#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    pub ty: Type,
    pub name: Token,
    pub parameter_names: Vec<Option<Token>>,
    pub body: Statement,
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Function_{}[{},{}]", self.name.value, self.ty, self.body)
    }
}

/// One top-level item, in source order.
#[derive(Debug, Clone)]
pub enum Item {
    Declaration(ExternalDeclaration),
    Function(FunctionDefinition),
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Declaration(declaration) => write!(f, "{}", declaration),
            Item::Function(function) => write!(f, "{}", function),
        }
    }
}

/// The ordered collection of top-level items produced by one parse.
///
/// No deduplication or merging: every registered declaration and
/// definition appears exactly once, in source order.
#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    pub items: Vec<Item>,
}

impl TranslationUnit {
    pub fn declarations(&self) -> impl Iterator<Item = &ExternalDeclaration> {
        self.items.iter().filter_map(|item| match item {
            Item::Declaration(declaration) => Some(declaration),
            Item::Function(_) => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(function) => Some(function),
            Item::Declaration(_) => None,
        })
    }
}

impl Display for TranslationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// The concrete tree builder: allocates the node variants of this
/// module and accumulates top-level items into a [`TranslationUnit`]
/// it owns, yielded to the caller once parsing completes.
#[derive(Debug, Default)]
pub struct Ast {
    unit: TranslationUnit,
}

impl Ast {
    pub fn new() -> Self {
        Ast::default()
    }

    pub fn unit(&self) -> &TranslationUnit {
        &self.unit
    }

    pub fn into_unit(self) -> TranslationUnit {
        self.unit
    }
}

impl AstFactory for Ast {
    type Expr = Expression;
    type Stmt = Statement;
    type Ty = Type;

    fn create_primary_expression(&mut self, token: Token) -> Expression {
        Expression::Primary { token }
    }

    fn create_unary_expression(&mut self, operator: Token, postfix: bool, operand: Expression)
        -> Expression {
        Expression::Unary {
            operator,
            postfix,
            operand: Box::new(operand),
        }
    }

    fn create_binary_expression(&mut self, operator: Token, left: Expression, right: Expression)
        -> Expression {
        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn create_call_expression(
        &mut self,
        token: Token,
        callee: Expression,
        arguments: Vec<Expression>,
    ) -> Expression {
        Expression::Call {
            token,
            callee: Box::new(callee),
            arguments,
        }
    }

    fn create_conditional_expression(
        &mut self,
        token: Token,
        condition: Expression,
        consequence: Expression,
        alternative: Expression,
    ) -> Expression {
        Expression::Conditional {
            token,
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternative: Box::new(alternative),
        }
    }

    fn create_block_statement(&mut self, loc: Position, statements: Vec<Statement>) -> Statement {
        Statement::Block {
            position: loc,
            statements,
        }
    }

    fn create_declaration_statement(
        &mut self,
        ty: Type,
        name: Token,
        init: Option<Expression>,
    ) -> Statement {
        Statement::Declaration { ty, name, init }
    }

    fn create_expression_statement(&mut self, loc: Position, expression: Expression) -> Statement {
        Statement::Expression {
            position: loc,
            expression,
        }
    }

    fn create_if_statement(
        &mut self,
        loc: Position,
        condition: Expression,
        consequence: Statement,
        alternative: Option<Statement>,
    ) -> Statement {
        Statement::If {
            position: loc,
            condition,
            consequence: Box::new(consequence),
            alternative: alternative.map(Box::new),
        }
    }

    fn create_return_statement(&mut self, loc: Position, expression: Option<Expression>)
        -> Statement {
        Statement::Return {
            position: loc,
            expression,
        }
    }

    fn create_while_statement(
        &mut self,
        loc: Position,
        condition: Expression,
        body: Statement,
    ) -> Statement {
        Statement::While {
            position: loc,
            condition,
            body: Box::new(body),
        }
    }

    fn create_annotated_while_statement(
        &mut self,
        loc: Position,
        condition: Expression,
        body: Statement,
        invariant: Expression,
        term: Option<Expression>,
        bound: Option<Token>,
    ) -> Statement {
        Statement::AnnotatedWhile {
            position: loc,
            condition,
            body: Box::new(body),
            invariant,
            term,
            bound,
        }
    }

    fn create_break_statement(&mut self, loc: Position) -> Statement {
        Statement::Break { position: loc }
    }

    fn create_continue_statement(&mut self, loc: Position) -> Statement {
        Statement::Continue { position: loc }
    }

    fn create_assume_statement(&mut self, keyword: Token, condition: Expression) -> Statement {
        Statement::Assume { keyword, condition }
    }

    fn create_assert_statement(&mut self, keyword: Token, condition: Expression) -> Statement {
        Statement::Assert { keyword, condition }
    }

    fn create_base_type(&mut self, kind: BaseKind) -> Type {
        Type::Base { kind }
    }

    fn create_pointer_type(&mut self, points_to: Type) -> Type {
        Type::Pointer {
            points_to: Box::new(points_to),
        }
    }

    fn create_function_type(&mut self, return_type: Type, parameters: Vec<Type>) -> Type {
        Type::Function {
            return_type: Box::new(return_type),
            parameters,
        }
    }

    fn create_external_declaration(&mut self, ty: Type, name: Token) {
        self.unit
            .items
            .push(Item::Declaration(ExternalDeclaration { ty, name }));
    }

    fn create_function_definition(
        &mut self,
        ty: Type,
        name: Token,
        parameter_names: Vec<Option<Token>>,
        body: Statement,
    ) {
        self.unit.items.push(Item::Function(FunctionDefinition {
            ty,
            name,
            parameter_names,
            body,
        }));
    }
}
