//! Typed views over the raw syntax tree.
//!
//! Each wrapper names one grammar production and exposes its labeled fields
//! (`name`, `condition`, `then`, ...) as accessors. The wrappers borrow
//! nothing: they hold the red node and navigate on demand, so they stay valid
//! as long as the tree they came from.

use crate::SyntaxKind::*;
use crate::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub trait AstNode {
    fn cast(syntax: SyntaxNode) -> Option<Self>
    where
        Self: Sized;

    fn syntax(&self) -> &SyntaxNode;
}

fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

fn children<N: AstNode>(parent: &SyntaxNode) -> impl Iterator<Item = N> + use<N> {
    parent.children().filter_map(N::cast)
}

fn token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(SyntaxElement::into_token)
        .find(|it| it.kind() == kind)
}

fn first_nontrivia_token(parent: &SyntaxNode) -> Option<SyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(SyntaxElement::into_token)
        .find(|it| !it.kind().is_trivia())
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn cast(syntax: SyntaxNode) -> Option<Self> {
                (syntax.kind() == $kind).then_some(Self(syntax))
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn preprocessor_section(&self) -> Option<PreprocessorSection> {
        child(&self.0)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + use<> {
        children(&self.0)
    }
}

ast_node!(PreprocessorSection, PREPROCESSOR_SECTION);

impl PreprocessorSection {
    pub fn directives(&self) -> impl Iterator<Item = Directive> + use<> {
        children(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Define(DefineDirective),
    Undef(UndefDirective),
    Include(IncludeDirective),
    If(IfDirective),
    Elif(ElifDirective),
    Else(ElseDirective),
    Endif(EndifDirective),
    Version(VersionDirective),
}

impl AstNode for Directive {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let directive = match syntax.kind() {
            DEFINE_DIRECTIVE => Self::Define(DefineDirective(syntax)),
            UNDEF_DIRECTIVE => Self::Undef(UndefDirective(syntax)),
            INCLUDE_DIRECTIVE => Self::Include(IncludeDirective(syntax)),
            IF_DIRECTIVE => Self::If(IfDirective(syntax)),
            ELIF_DIRECTIVE => Self::Elif(ElifDirective(syntax)),
            ELSE_DIRECTIVE => Self::Else(ElseDirective(syntax)),
            ENDIF_DIRECTIVE => Self::Endif(EndifDirective(syntax)),
            VERSION_DIRECTIVE => Self::Version(VersionDirective(syntax)),
            _ => return None,
        };
        Some(directive)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Define(it) => &it.0,
            Self::Undef(it) => &it.0,
            Self::Include(it) => &it.0,
            Self::If(it) => &it.0,
            Self::Elif(it) => &it.0,
            Self::Else(it) => &it.0,
            Self::Endif(it) => &it.0,
            Self::Version(it) => &it.0,
        }
    }
}

ast_node!(DefineDirective, DEFINE_DIRECTIVE);

impl DefineDirective {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn value(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(UndefDirective, UNDEF_DIRECTIVE);

impl UndefDirective {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }
}

ast_node!(IncludeDirective, INCLUDE_DIRECTIVE);

impl IncludeDirective {
    pub fn path(&self) -> Option<SyntaxToken> {
        token(&self.0, STRING_LITERAL)
    }
}

ast_node!(IfDirective, IF_DIRECTIVE);

impl IfDirective {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(ElifDirective, ELIF_DIRECTIVE);

impl ElifDirective {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(ElseDirective, ELSE_DIRECTIVE);
ast_node!(EndifDirective, ENDIF_DIRECTIVE);

ast_node!(VersionDirective, VERSION_DIRECTIVE);

impl VersionDirective {
    pub fn key(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn value(&self) -> Option<Expr> {
        child(&self.0)
    }
}

/// Anything that may appear at the top level of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    FunctionDeclaration(FunctionDeclaration),
    ProcedureDeclaration(ProcedureDeclaration),
    FunctionImplementation(FunctionImplementation),
    ProcedureImplementation(ProcedureImplementation),
    Label(Label),
    Stmt(Stmt),
}

impl AstNode for Item {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let item = match syntax.kind() {
            FUNCTION_DECLARATION => Self::FunctionDeclaration(FunctionDeclaration(syntax)),
            PROCEDURE_DECLARATION => Self::ProcedureDeclaration(ProcedureDeclaration(syntax)),
            FUNCTION_IMPLEMENTATION => {
                Self::FunctionImplementation(FunctionImplementation(syntax))
            }
            PROCEDURE_IMPLEMENTATION => {
                Self::ProcedureImplementation(ProcedureImplementation(syntax))
            }
            LABEL => Self::Label(Label(syntax)),
            _ => return Stmt::cast(syntax).map(Self::Stmt),
        };
        Some(item)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::FunctionDeclaration(it) => &it.0,
            Self::ProcedureDeclaration(it) => &it.0,
            Self::FunctionImplementation(it) => &it.0,
            Self::ProcedureImplementation(it) => &it.0,
            Self::Label(it) => &it.0,
            Self::Stmt(it) => it.syntax(),
        }
    }
}

ast_node!(FunctionDeclaration, FUNCTION_DECLARATION);

impl FunctionDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        child(&self.0)
    }

    pub fn return_type(&self) -> Option<Type> {
        child(&self.0)
    }
}

ast_node!(ProcedureDeclaration, PROCEDURE_DECLARATION);

impl ProcedureDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        child(&self.0)
    }
}

ast_node!(FunctionImplementation, FUNCTION_IMPLEMENTATION);

impl FunctionImplementation {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        child(&self.0)
    }

    pub fn return_type(&self) -> Option<Type> {
        child(&self.0)
    }

    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }

    /// The closing keyword. `ENDPROC` here is a mismatch for a consumer to
    /// report; the parser keeps the tree intact either way.
    pub fn closer(&self) -> Option<SyntaxToken> {
        token(&self.0, ENDFUNC_KW).or_else(|| token(&self.0, ENDPROC_KW))
    }
}

ast_node!(ProcedureImplementation, PROCEDURE_IMPLEMENTATION);

impl ProcedureImplementation {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        child(&self.0)
    }

    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }

    pub fn closer(&self) -> Option<SyntaxToken> {
        token(&self.0, ENDPROC_KW).or_else(|| token(&self.0, ENDFUNC_KW))
    }
}

ast_node!(ParameterList, PARAMETER_LIST);

impl ParameterList {
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + use<> {
        children(&self.0)
    }
}

ast_node!(Parameter, PARAMETER);

impl Parameter {
    pub fn var_token(&self) -> Option<SyntaxToken> {
        token(&self.0, VAR_KW)
    }

    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn dimensions(&self) -> Option<ArrayDimensions> {
        child(&self.0)
    }
}

ast_node!(Type, TYPE);

impl Type {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        token(&self.0, TYPE_NAME)
    }
}

ast_node!(VariableDeclaration, VARIABLE_DECLARATION);

impl VariableDeclaration {
    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn dimensions(&self) -> Option<ArrayDimensions> {
        child(&self.0)
    }

    pub fn initializer(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(ArrayDimensions, ARRAY_DIMENSIONS);

impl ArrayDimensions {
    pub fn dimensions(&self) -> impl Iterator<Item = Expr> + use<> {
        children(&self.0)
    }
}

ast_node!(Label, LABEL);

impl Label {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    VariableDeclaration(VariableDeclaration),
    Let(LetStatement),
    IfSingleLine(IfSingleLineStatement),
    IfBlock(IfBlockStatement),
    Select(SelectStatement),
    WhileSingleLine(WhileSingleLineStatement),
    WhileBlock(WhileBlockStatement),
    RepeatUntil(RepeatUntilStatement),
    LoopBlock(LoopBlockStatement),
    ForBlock(ForBlockStatement),
    Goto(GotoStatement),
    Gosub(GosubStatement),
    Return(ReturnStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    End(EndStatement),
    Stop(StopStatement),
    Block(BlockStatement),
    PredefinedCall(PredefinedCall),
    ProcedureCall(ProcedureCall),
    Expression(ExpressionStatement),
}

impl AstNode for Stmt {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let stmt = match syntax.kind() {
            VARIABLE_DECLARATION => Self::VariableDeclaration(VariableDeclaration(syntax)),
            LET_STATEMENT => Self::Let(LetStatement(syntax)),
            IF_SINGLE_LINE_STATEMENT => Self::IfSingleLine(IfSingleLineStatement(syntax)),
            IF_BLOCK_STATEMENT => Self::IfBlock(IfBlockStatement(syntax)),
            SELECT_STATEMENT => Self::Select(SelectStatement(syntax)),
            WHILE_SINGLE_LINE_STATEMENT => {
                Self::WhileSingleLine(WhileSingleLineStatement(syntax))
            }
            WHILE_BLOCK_STATEMENT => Self::WhileBlock(WhileBlockStatement(syntax)),
            REPEAT_UNTIL_STATEMENT => Self::RepeatUntil(RepeatUntilStatement(syntax)),
            LOOP_BLOCK_STATEMENT => Self::LoopBlock(LoopBlockStatement(syntax)),
            FOR_BLOCK_STATEMENT => Self::ForBlock(ForBlockStatement(syntax)),
            GOTO_STATEMENT => Self::Goto(GotoStatement(syntax)),
            GOSUB_STATEMENT => Self::Gosub(GosubStatement(syntax)),
            RETURN_STATEMENT => Self::Return(ReturnStatement(syntax)),
            BREAK_STATEMENT => Self::Break(BreakStatement(syntax)),
            CONTINUE_STATEMENT => Self::Continue(ContinueStatement(syntax)),
            END_STATEMENT => Self::End(EndStatement(syntax)),
            STOP_STATEMENT => Self::Stop(StopStatement(syntax)),
            BLOCK_STATEMENT => Self::Block(BlockStatement(syntax)),
            PREDEFINED_CALL => Self::PredefinedCall(PredefinedCall(syntax)),
            PROCEDURE_CALL => Self::ProcedureCall(ProcedureCall(syntax)),
            EXPRESSION_STATEMENT => Self::Expression(ExpressionStatement(syntax)),
            _ => return None,
        };
        Some(stmt)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::VariableDeclaration(it) => &it.0,
            Self::Let(it) => &it.0,
            Self::IfSingleLine(it) => &it.0,
            Self::IfBlock(it) => &it.0,
            Self::Select(it) => &it.0,
            Self::WhileSingleLine(it) => &it.0,
            Self::WhileBlock(it) => &it.0,
            Self::RepeatUntil(it) => &it.0,
            Self::LoopBlock(it) => &it.0,
            Self::ForBlock(it) => &it.0,
            Self::Goto(it) => &it.0,
            Self::Gosub(it) => &it.0,
            Self::Return(it) => &it.0,
            Self::Break(it) => &it.0,
            Self::Continue(it) => &it.0,
            Self::End(it) => &it.0,
            Self::Stop(it) => &it.0,
            Self::Block(it) => &it.0,
            Self::PredefinedCall(it) => &it.0,
            Self::ProcedureCall(it) => &it.0,
            Self::Expression(it) => &it.0,
        }
    }
}

ast_node!(LetStatement, LET_STATEMENT);

impl LetStatement {
    pub fn target(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn op(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(SyntaxElement::into_token)
            .find(|it| it.kind().is_assign_op())
    }

    pub fn value(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }
}

ast_node!(IfSingleLineStatement, IF_SINGLE_LINE_STATEMENT);

impl IfSingleLineStatement {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn then_statement(&self) -> Option<Stmt> {
        child(&self.0)
    }
}

ast_node!(IfBlockStatement, IF_BLOCK_STATEMENT);

impl IfBlockStatement {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn then_body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }

    pub fn elseif_blocks(&self) -> impl Iterator<Item = ElseifBlock> + use<> {
        children(&self.0)
    }

    pub fn else_block(&self) -> Option<ElseBlock> {
        child(&self.0)
    }
}

ast_node!(ElseifBlock, ELSEIF_BLOCK);

impl ElseifBlock {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }
}

ast_node!(ElseBlock, ELSE_BLOCK);

impl ElseBlock {
    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }
}

ast_node!(SelectStatement, SELECT_STATEMENT);

impl SelectStatement {
    pub fn selector(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn case_blocks(&self) -> impl Iterator<Item = CaseBlock> + use<> {
        children(&self.0)
    }

    pub fn default_block(&self) -> Option<DefaultBlock> {
        child(&self.0)
    }
}

ast_node!(CaseBlock, CASE_BLOCK);

impl CaseBlock {
    pub fn specifier_list(&self) -> Option<CaseSpecifierList> {
        child(&self.0)
    }

    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }
}

ast_node!(CaseSpecifierList, CASE_SPECIFIER_LIST);

impl CaseSpecifierList {
    pub fn specifiers(&self) -> impl Iterator<Item = CaseSpecifier> + use<> {
        children(&self.0)
    }
}

ast_node!(CaseSpecifier, CASE_SPECIFIER);

impl CaseSpecifier {
    pub fn is_range(&self) -> bool {
        token(&self.0, DOT_DOT).is_some()
    }

    pub fn from(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn to(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }
}

ast_node!(DefaultBlock, DEFAULT_BLOCK);

impl DefaultBlock {
    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }
}

ast_node!(WhileSingleLineStatement, WHILE_SINGLE_LINE_STATEMENT);

impl WhileSingleLineStatement {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn body_statement(&self) -> Option<Stmt> {
        child(&self.0)
    }
}

ast_node!(WhileBlockStatement, WHILE_BLOCK_STATEMENT);

impl WhileBlockStatement {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }
}

ast_node!(RepeatUntilStatement, REPEAT_UNTIL_STATEMENT);

impl RepeatUntilStatement {
    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }

    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(LoopBlockStatement, LOOP_BLOCK_STATEMENT);

impl LoopBlockStatement {
    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }
}

ast_node!(ForBlockStatement, FOR_BLOCK_STATEMENT);

impl ForBlockStatement {
    pub fn var(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn start(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn end(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }

    pub fn step(&self) -> Option<Expr> {
        token(&self.0, STEP_KW)?;
        children(&self.0).nth(2)
    }

    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }

    /// The optional identifier after `NEXT`. Not validated against the loop
    /// variable here; that is a consumer's concern.
    pub fn next_var(&self) -> Option<SyntaxToken> {
        let mut after_next = false;
        for element in self.0.children_with_tokens() {
            if let Some(token) = element.into_token() {
                if token.kind() == NEXT_KW {
                    after_next = true;
                } else if after_next && token.kind() == IDENT {
                    return Some(token);
                }
            }
        }
        None
    }
}

ast_node!(GotoStatement, GOTO_STATEMENT);

impl GotoStatement {
    pub fn label(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }
}

ast_node!(GosubStatement, GOSUB_STATEMENT);

impl GosubStatement {
    pub fn label(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }
}

ast_node!(ReturnStatement, RETURN_STATEMENT);

impl ReturnStatement {
    pub fn value(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(BreakStatement, BREAK_STATEMENT);
ast_node!(ContinueStatement, CONTINUE_STATEMENT);
ast_node!(EndStatement, END_STATEMENT);
ast_node!(StopStatement, STOP_STATEMENT);

ast_node!(BlockStatement, BLOCK_STATEMENT);

impl BlockStatement {
    pub fn body(&self) -> impl Iterator<Item = Stmt> + use<> {
        children(&self.0)
    }
}

ast_node!(PredefinedCall, PREDEFINED_CALL);

impl PredefinedCall {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, BUILTIN_STATEMENT)
    }

    pub fn args(&self) -> Option<Args> {
        child(&self.0)
    }
}

ast_node!(ProcedureCall, PROCEDURE_CALL);

impl ProcedureCall {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }

    pub fn args(&self) -> Option<Args> {
        child(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Args {
    Parenthesized(ParenthesizedArgs),
    Bare(BareArgs),
}

impl AstNode for Args {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        match syntax.kind() {
            PARENTHESIZED_ARGS => Some(Self::Parenthesized(ParenthesizedArgs(syntax))),
            BARE_ARGS => Some(Self::Bare(BareArgs(syntax))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Parenthesized(it) => &it.0,
            Self::Bare(it) => &it.0,
        }
    }
}

impl Args {
    pub fn arguments(&self) -> Option<ArgumentSequence> {
        child(self.syntax())
    }
}

ast_node!(ParenthesizedArgs, PARENTHESIZED_ARGS);
ast_node!(BareArgs, BARE_ARGS);

ast_node!(ArgumentSequence, ARGUMENT_SEQUENCE);

impl ArgumentSequence {
    pub fn exprs(&self) -> impl Iterator<Item = Expr> + use<> {
        children(&self.0)
    }
}

ast_node!(ExpressionStatement, EXPRESSION_STATEMENT);

impl ExpressionStatement {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Parens(ParensExpression),
    Call(CallExpression),
    MemberRef(MemberReference),
    Index(IndexExpression),
    NameRef(NameRef),
    Constant(Constant),
}

impl AstNode for Expr {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let expr = match syntax.kind() {
            BINARY_EXPRESSION => Self::Binary(BinaryExpression(syntax)),
            UNARY_EXPRESSION => Self::Unary(UnaryExpression(syntax)),
            PARENS_EXPRESSION => Self::Parens(ParensExpression(syntax)),
            CALL_EXPRESSION => Self::Call(CallExpression(syntax)),
            MEMBER_REFERENCE => Self::MemberRef(MemberReference(syntax)),
            INDEX_EXPRESSION => Self::Index(IndexExpression(syntax)),
            NAME_REF => Self::NameRef(NameRef(syntax)),
            CONSTANT => Self::Constant(Constant(syntax)),
            _ => return None,
        };
        Some(expr)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Binary(it) => &it.0,
            Self::Unary(it) => &it.0,
            Self::Parens(it) => &it.0,
            Self::Call(it) => &it.0,
            Self::MemberRef(it) => &it.0,
            Self::Index(it) => &it.0,
            Self::NameRef(it) => &it.0,
            Self::Constant(it) => &it.0,
        }
    }
}

ast_node!(BinaryExpression, BINARY_EXPRESSION);

impl BinaryExpression {
    pub fn left(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn op(&self) -> Option<SyntaxToken> {
        first_nontrivia_token(&self.0)
    }

    pub fn right(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }
}

ast_node!(UnaryExpression, UNARY_EXPRESSION);

impl UnaryExpression {
    pub fn op(&self) -> Option<SyntaxToken> {
        first_nontrivia_token(&self.0)
    }

    pub fn operand(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(ParensExpression, PARENS_EXPRESSION);

impl ParensExpression {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

ast_node!(CallExpression, CALL_EXPRESSION);

impl CallExpression {
    /// The called name: a user identifier or a builtin function.
    pub fn function(&self) -> Option<NameRef> {
        child(&self.0)
    }

    pub fn arguments(&self) -> Option<ArgumentSequence> {
        child(&self.0)
    }
}

ast_node!(MemberReference, MEMBER_REFERENCE);

impl MemberReference {
    pub fn object(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn member(&self) -> Option<SyntaxToken> {
        token(&self.0, IDENT)
    }
}

ast_node!(IndexExpression, INDEX_EXPRESSION);

impl IndexExpression {
    pub fn array(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn indexes(&self) -> impl Iterator<Item = Expr> + use<> {
        children::<Expr>(&self.0).skip(1)
    }
}

ast_node!(NameRef, NAME_REF);

impl NameRef {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_nontrivia_token(&self.0)
    }

    pub fn is_builtin(&self) -> bool {
        self.token().is_some_and(|it| it.kind() == BUILTIN_FUNCTION)
    }
}

ast_node!(Constant, CONSTANT);

impl Constant {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_nontrivia_token(&self.0)
    }
}
