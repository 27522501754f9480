//! Integration tests for the complete parsing pipeline.
//!
//! These tests drive source text through tokenization and parsing and
//! check the resulting translation unit, including the tree-builder
//! seam: the parser must work unchanged against a builder that never
//! allocates a single node.

use tinyc::{
    ast::{ast::AstFactory, types::BaseKind},
    errors::diagnostics::{BufferedDiagnostic, Diagnostic},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenStream},
    },
    parser::parser::{parse, Parser},
    Position,
};

#[test]
fn test_parse_full_program() {
    let source = r#"
        int abs(int x);
        char* message;

        int abs(int x) {
            if (x < 0)
                return -x;
            return x;
        }

        int sum(int* values, int count) {
            int total = 0;
            int i = 0;
            while (i < count)
                invariant (total >= 0)
                term (count - i; bound)
            {
                assert (i < count);
                total = total + values[i];
                i++;
            }
            return total;
        }
    "#;

    let tokens = tokenize(source.to_string(), Some("program.c".to_string())).unwrap();
    let mut diagnostic = BufferedDiagnostic::new();
    let (unit, result) = parse(tokens, &mut diagnostic);

    assert!(result.is_ok());
    assert_eq!(diagnostic.error_count(), 0);
    assert_eq!(unit.items.len(), 4);
    assert_eq!(unit.declarations().count(), 2);
    assert_eq!(unit.functions().count(), 2);

    let sum = unit.functions().nth(1).unwrap();
    assert_eq!(sum.name.value, "sum");
    assert_eq!(sum.parameter_names.len(), 2);
    assert_eq!(
        sum.body.to_string(),
        "Block[Declaration_total[Type_int,Const_0],\
         Declaration_i[Type_int,Const_0],\
         AnnotatedWhile[Binary_<[Var_i,Var_count],\
         Block[Assert[Binary_<[Var_i,Var_count]],\
         Expression[Binary_=[Var_total,Binary_+[Var_total,Binary_[[Var_values,Var_i]]]],\
         Expression[Unary_++[Var_i]]],\
         Binary_>=[Var_total,Const_0],\
         Binary_-[Var_count,Var_i],bound],\
         Return[Var_total]]"
    );
}

#[test]
fn test_parse_prototype_then_definition_kept_separate() {
    let source = "int f(void); int f(void) { return 0; }";
    let tokens = tokenize(source.to_string(), Some("test.c".to_string())).unwrap();
    let mut diagnostic = BufferedDiagnostic::new();
    let (unit, result) = parse(tokens, &mut diagnostic);

    assert!(result.is_ok());
    // no merging: the prototype and the definition are both retained
    assert_eq!(unit.items.len(), 2);
    assert_eq!(unit.declarations().count(), 1);
    assert_eq!(unit.functions().count(), 1);
}

#[test]
fn test_parse_error_stops_translation_unit() {
    let source = "int ok(void) { return 1; } int bad(void) { return ; int after(void) { return 2; }";
    let tokens = tokenize(source.to_string(), Some("test.c".to_string())).unwrap();
    let mut diagnostic = BufferedDiagnostic::new();
    let (unit, result) = parse(tokens, &mut diagnostic);

    assert!(result.is_err());
    // everything parsed before the hard stop is retained, nothing after
    assert_eq!(unit.functions().count(), 1);
    assert_eq!(unit.functions().next().unwrap().name.value, "ok");
}

#[test]
fn test_lex_error_reports_position() {
    let result = tokenize("int x = @;".to_string(), Some("test.c".to_string()));

    let error = result.err().expect("lexing should fail");
    assert_eq!(error.get_position().0, 8);
    assert!(error.message().contains("unrecognised token"));
}

/// A tree builder that only counts reductions. Parsing with it proves
/// the grammar recognizer is fully decoupled from node construction.
#[derive(Debug, Default)]
struct CountingBuilder {
    expressions: usize,
    statements: usize,
    types: usize,
    items: usize,
}

impl AstFactory for CountingBuilder {
    type Expr = ();
    type Stmt = ();
    type Ty = ();

    fn create_primary_expression(&mut self, _token: Token) {
        self.expressions += 1;
    }
    fn create_unary_expression(&mut self, _operator: Token, _postfix: bool, _operand: ()) {
        self.expressions += 1;
    }
    fn create_binary_expression(&mut self, _operator: Token, _left: (), _right: ()) {
        self.expressions += 1;
    }
    fn create_call_expression(&mut self, _token: Token, _callee: (), _arguments: Vec<()>) {
        self.expressions += 1;
    }
    fn create_conditional_expression(
        &mut self,
        _token: Token,
        _condition: (),
        _consequence: (),
        _alternative: (),
    ) {
        self.expressions += 1;
    }

    fn create_block_statement(&mut self, _loc: Position, _statements: Vec<()>) {
        self.statements += 1;
    }
    fn create_declaration_statement(&mut self, _ty: (), _name: Token, _init: Option<()>) {
        self.statements += 1;
    }
    fn create_expression_statement(&mut self, _loc: Position, _expression: ()) {
        self.statements += 1;
    }
    fn create_if_statement(
        &mut self,
        _loc: Position,
        _condition: (),
        _consequence: (),
        _alternative: Option<()>,
    ) {
        self.statements += 1;
    }
    fn create_return_statement(&mut self, _loc: Position, _expression: Option<()>) {
        self.statements += 1;
    }
    fn create_while_statement(&mut self, _loc: Position, _condition: (), _body: ()) {
        self.statements += 1;
    }
    fn create_annotated_while_statement(
        &mut self,
        _loc: Position,
        _condition: (),
        _body: (),
        _invariant: (),
        _term: Option<()>,
        _bound: Option<Token>,
    ) {
        self.statements += 1;
    }
    fn create_break_statement(&mut self, _loc: Position) {
        self.statements += 1;
    }
    fn create_continue_statement(&mut self, _loc: Position) {
        self.statements += 1;
    }
    fn create_assume_statement(&mut self, _keyword: Token, _condition: ()) {
        self.statements += 1;
    }
    fn create_assert_statement(&mut self, _keyword: Token, _condition: ()) {
        self.statements += 1;
    }

    fn create_base_type(&mut self, _kind: BaseKind) {
        self.types += 1;
    }
    fn create_pointer_type(&mut self, _points_to: ()) {
        self.types += 1;
    }
    fn create_function_type(&mut self, _return_type: (), _parameters: Vec<()>) {
        self.types += 1;
    }

    fn create_external_declaration(&mut self, _ty: (), _name: Token) {
        self.items += 1;
    }
    fn create_function_definition(
        &mut self,
        _ty: (),
        _name: Token,
        _parameter_names: Vec<Option<Token>>,
        _body: (),
    ) {
        self.items += 1;
    }
}

#[test]
fn test_parser_is_decoupled_from_node_construction() {
    let source = "char* s; int f(int n) { if (n > 0) return n; return -n; }";
    let tokens = tokenize(source.to_string(), Some("test.c".to_string())).unwrap();
    let mut diagnostic = BufferedDiagnostic::new();

    let mut parser = Parser::new(
        TokenStream::new(tokens),
        CountingBuilder::default(),
        &mut diagnostic,
    );
    let result = parser.parse_translation_unit();
    let builder = parser.into_factory();

    assert!(result.is_ok());
    assert_eq!(diagnostic.error_count(), 0);
    assert_eq!(builder.items, 2);
    // char, char*, int (return), int (parameter), int (function type)
    assert_eq!(builder.types, 5);
    // block, if, two returns
    assert_eq!(builder.statements, 4);
    // n > 0, n, 0, n (returned), n (negated), -n
    assert_eq!(builder.expressions, 6);
}

#[test]
fn test_default_builder_matches_counting_builder_reductions() {
    let source = "int f(void) { assume (x); while (c) invariant (c) { x = x + 1; } }";
    let tokens = tokenize(source.to_string(), Some("test.c".to_string())).unwrap();

    let mut diagnostic = BufferedDiagnostic::new();
    let (unit, result) = parse(tokens.clone(), &mut diagnostic);
    assert!(result.is_ok());

    let mut counting_diagnostic = BufferedDiagnostic::new();
    let mut parser = Parser::new(
        TokenStream::new(tokens),
        CountingBuilder::default(),
        &mut counting_diagnostic,
    );
    assert!(parser.parse_translation_unit().is_ok());
    let builder = parser.into_factory();

    assert_eq!(builder.items, unit.items.len());
    assert_eq!(builder.statements, 5); // outer block, assume, while, inner block, assignment
}
