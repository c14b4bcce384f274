#[allow(non_camel_case_types)]
#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    COMMA,
    COLON,
    DOT,
    DOT_DOT,

    EQ,
    PLUS_EQ,
    MINUS_EQ,
    STAR_EQ,
    SLASH_EQ,
    PERCENT_EQ,
    AMP_EQ,
    PIPE_EQ,

    PIPE_PIPE,
    AMP_AMP,
    PIPE,
    AMP,
    EQ_EQ,
    BANG_EQ,
    LT_GT,
    LT,
    GT,
    LT_EQ,
    GT_EQ,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    CARET,
    STAR_STAR,
    BANG,

    IF_KW,
    THEN_KW,
    ELSEIF_KW,
    ELSE_KW,
    ENDIF_KW,
    SELECT_KW,
    CASE_KW,
    DEFAULT_KW,
    ENDSELECT_KW,
    WHILE_KW,
    DO_KW,
    ENDWHILE_KW,
    REPEAT_KW,
    UNTIL_KW,
    LOOP_KW,
    ENDLOOP_KW,
    FOR_KW,
    TO_KW,
    STEP_KW,
    NEXT_KW,
    GOTO_KW,
    GOSUB_KW,
    RETURN_KW,
    BREAK_KW,
    CONTINUE_KW,
    END_KW,
    STOP_KW,
    BEGIN_KW,
    LET_KW,
    DECLARE_KW,
    FUNCTION_KW,
    PROCEDURE_KW,
    ENDFUNC_KW,
    ENDPROC_KW,
    VAR_KW,
    NOT_KW,
    TRUE_KW,
    FALSE_KW,

    /// Any of the 28 type names (`STRING`, `INTEGER`, ...); the lexeme keeps
    /// the concrete name.
    TYPE_NAME,
    /// A name from the builtin statement table (`PRINTLN`, `FOPEN`, ...).
    BUILTIN_STATEMENT,
    /// A name from the builtin function table (`ABS`, `MID`, ...).
    BUILTIN_FUNCTION,
    IDENT,

    INT_NUMBER,
    FLOAT_NUMBER,
    HEX_NUMBER,
    STRING_LITERAL,
    COLOR_CODE,

    DEFINE_DIR,
    UNDEF_DIR,
    INCLUDE_DIR,
    IF_DIR,
    ELIF_DIR,
    ELSE_DIR,
    ENDIF_DIR,
    VERSION_DIR,

    WHITESPACE,
    COMMENT,
    UNKNOWN,
    EOF,

    SOURCE_FILE,
    PREPROCESSOR_SECTION,
    DEFINE_DIRECTIVE,
    UNDEF_DIRECTIVE,
    INCLUDE_DIRECTIVE,
    IF_DIRECTIVE,
    ELIF_DIRECTIVE,
    ELSE_DIRECTIVE,
    ENDIF_DIRECTIVE,
    VERSION_DIRECTIVE,

    FUNCTION_DECLARATION,
    PROCEDURE_DECLARATION,
    FUNCTION_IMPLEMENTATION,
    PROCEDURE_IMPLEMENTATION,
    PARAMETER_LIST,
    PARAMETER,
    TYPE,
    VARIABLE_DECLARATION,
    ARRAY_DIMENSIONS,

    LET_STATEMENT,
    IF_SINGLE_LINE_STATEMENT,
    IF_BLOCK_STATEMENT,
    ELSEIF_BLOCK,
    ELSE_BLOCK,
    SELECT_STATEMENT,
    CASE_BLOCK,
    CASE_SPECIFIER_LIST,
    CASE_SPECIFIER,
    DEFAULT_BLOCK,
    WHILE_SINGLE_LINE_STATEMENT,
    WHILE_BLOCK_STATEMENT,
    REPEAT_UNTIL_STATEMENT,
    LOOP_BLOCK_STATEMENT,
    FOR_BLOCK_STATEMENT,
    GOTO_STATEMENT,
    GOSUB_STATEMENT,
    RETURN_STATEMENT,
    BREAK_STATEMENT,
    CONTINUE_STATEMENT,
    END_STATEMENT,
    STOP_STATEMENT,
    BLOCK_STATEMENT,
    PREDEFINED_CALL,
    PROCEDURE_CALL,
    PARENTHESIZED_ARGS,
    BARE_ARGS,
    ARGUMENT_SEQUENCE,
    EXPRESSION_STATEMENT,
    LABEL,

    BINARY_EXPRESSION,
    UNARY_EXPRESSION,
    PARENS_EXPRESSION,
    CALL_EXPRESSION,
    MEMBER_REFERENCE,
    INDEX_EXPRESSION,
    NAME_REF,
    CONSTANT,

    ERROR,
    TOMBSTONE,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    pub fn is_directive(self) -> bool {
        matches!(
            self,
            Self::DEFINE_DIR
                | Self::UNDEF_DIR
                | Self::INCLUDE_DIR
                | Self::IF_DIR
                | Self::ELIF_DIR
                | Self::ELSE_DIR
                | Self::ENDIF_DIR
                | Self::VERSION_DIR
        )
    }

    /// Operators accepted between the target and value of a `let_statement`.
    pub fn is_assign_op(self) -> bool {
        matches!(
            self,
            Self::EQ
                | Self::PLUS_EQ
                | Self::MINUS_EQ
                | Self::STAR_EQ
                | Self::SLASH_EQ
                | Self::PERCENT_EQ
                | Self::AMP_EQ
                | Self::PIPE_EQ
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}
