//! Static reserved-word tables.
//!
//! All tables are sorted by their uppercase spelling and probed with a
//! case-insensitive binary search, so classification never allocates. The
//! builtin lists aggregate PPL versions 1.00-4.00, IcyBoard extensions
//! included.

use std::cmp::Ordering;

use ppl_syntax::SyntaxKind::{self, *};

/// Classifies an identifier lexeme, most specific tier first: statement
/// keywords, then type names, then the builtin tables.
pub(crate) fn classify(ident: &str) -> SyntaxKind {
    if let Ok(index) =
        KEYWORDS.binary_search_by(|&(name, _)| compare_uppercase(name, ident))
    {
        return KEYWORDS[index].1;
    }
    if contains(TYPES, ident) {
        return TYPE_NAME;
    }
    if contains(BUILTIN_STATEMENTS, ident) {
        return BUILTIN_STATEMENT;
    }
    if contains(BUILTIN_FUNCTIONS, ident) {
        return BUILTIN_FUNCTION;
    }
    IDENT
}

/// Maps the word after `;$` to its directive head kind.
pub(crate) fn directive_kind(word: &str) -> Option<SyntaxKind> {
    let index = DIRECTIVES.binary_search_by(|&(name, _)| compare_uppercase(name, word)).ok()?;
    Some(DIRECTIVES[index].1)
}

fn contains(table: &[&str], ident: &str) -> bool {
    table.binary_search_by(|&name| compare_uppercase(name, ident)).is_ok()
}

/// `upper` must already be uppercase; `ident` may be any casing.
fn compare_uppercase(upper: &str, ident: &str) -> Ordering {
    upper.bytes().cmp(ident.bytes().map(|b| b.to_ascii_uppercase()))
}

const DIRECTIVES: &[(&str, SyntaxKind)] = &[
    ("DEFINE", DEFINE_DIR),
    ("ELIF", ELIF_DIR),
    ("ELSE", ELSE_DIR),
    ("ENDIF", ENDIF_DIR),
    ("IF", IF_DIR),
    ("INCLUDE", INCLUDE_DIR),
    ("UNDEF", UNDEF_DIR),
];

const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("BEGIN", BEGIN_KW),
    ("BREAK", BREAK_KW),
    ("CASE", CASE_KW),
    ("CONTINUE", CONTINUE_KW),
    ("DECLARE", DECLARE_KW),
    ("DEFAULT", DEFAULT_KW),
    ("DO", DO_KW),
    ("ELSE", ELSE_KW),
    ("ELSEIF", ELSEIF_KW),
    ("END", END_KW),
    ("ENDFUNC", ENDFUNC_KW),
    ("ENDIF", ENDIF_KW),
    ("ENDLOOP", ENDLOOP_KW),
    ("ENDPROC", ENDPROC_KW),
    ("ENDSELECT", ENDSELECT_KW),
    ("ENDWHILE", ENDWHILE_KW),
    ("FALSE", FALSE_KW),
    ("FOR", FOR_KW),
    ("FUNCTION", FUNCTION_KW),
    ("GOSUB", GOSUB_KW),
    ("GOTO", GOTO_KW),
    ("IF", IF_KW),
    ("LET", LET_KW),
    ("LOOP", LOOP_KW),
    ("NEXT", NEXT_KW),
    ("NOT", NOT_KW),
    ("PROCEDURE", PROCEDURE_KW),
    ("REPEAT", REPEAT_KW),
    ("RETURN", RETURN_KW),
    ("SELECT", SELECT_KW),
    ("STEP", STEP_KW),
    ("STOP", STOP_KW),
    ("THEN", THEN_KW),
    ("TO", TO_KW),
    ("TRUE", TRUE_KW),
    ("UNTIL", UNTIL_KW),
    ("VAR", VAR_KW),
    ("WHILE", WHILE_KW),
];

const TYPES: &[&str] = &[
    "BIGSTR", "BOOLEAN", "BYTE", "DATE", "DDATE", "DOUBLE", "DREAL",
    "DWORD", "EDATE", "FLOAT", "INT", "INTEGER", "LONG", "MONEY",
    "MSGAREAID", "PASSWORD", "REAL", "SBYTE", "SDWORD", "SHORT", "STRING",
    "SWORD", "TIME", "UBYTE", "UDWORD", "UNSIGNED", "UWORD", "WORD",
];

const BUILTIN_STATEMENTS: &[&str] = &[
    "ADJBYTES", "ADJDBYTES", "ADJTBYTES", "ADJTFILES", "APPEND", "BACKUP",
    "BITCLEAR", "BITSET", "BYE", "CALL", "CDCHKOFF", "CDCHKON", "CHDIR",
    "CLREOL", "CLS", "COLOR", "CONFFLAG", "CONFUNFLAG", "COPY", "CURSOR",
    "DBGLEVEL", "DEC", "DELAY", "DELETE", "DELUSER", "DIR", "DISPFILE",
    "DISPSTR", "DISPTEXT", "DOWNLOAD", "DTROFF", "DTRON", "EVT", "FAPPEND",
    "FCLOSE", "FCLOSEALL", "FCREATE", "FDEFIN", "FDEFOUT", "FDGET",
    "FDPUT", "FDPUTLN", "FDPUTPAD", "FDREAD", "FDWRITE", "FGET", "FLAG",
    "FOPEN", "FORWARD", "FPUT", "FPUTLN", "FPUTPAD", "FREAD", "FREALTUSER",
    "FRESHLINE", "FSEEK", "FWRITE", "GETALTUSER", "GETTOKEN", "GETUSER",
    "GOODBYE", "HANGUP", "INC", "INPUT", "INPUTCC", "INPUTDATE",
    "INPUTINT", "INPUTMONEY", "INPUTSTR", "INPUTTEXT", "INPUTTIME",
    "INPUTYN", "JOIN", "KBDFILE", "KBDFLUSH", "KBDSTRING", "KBDSTUFF",
    "KEYFLUSH", "LANG", "LASTIN", "LOG", "MDMFLUSH", "MKDIR", "MORE",
    "MOUSEREG", "MPRINT", "MPRINTLN", "NEWLINE", "NEWLINES", "OPTEXT",
    "PAGEOFF", "PAGEON", "POP", "PRFOUND", "PRFOUNDLN", "PRINT", "PRINTLN",
    "PROMPTSTR", "PUSH", "PUTALTUSER", "PUTUSER", "QUEST", "RDUNET",
    "RDUSYS", "REDIM", "RENAME", "RESETDISP", "RESTSCRN", "RMDIR",
    "SAVESCRN", "SCRFILE", "SEARCHFIND", "SEARCHINIT", "SEARCHSTOP",
    "SHELL", "SORT", "SOUND", "SOUNDDELAY", "SPRINT", "SPRINTLN",
    "STACKABORT", "STARTDISP", "TOKENIZE", "TPACGET", "TPACPUT",
    "TPACREAD", "TPACWRITE", "TPAGET", "TPAPUT", "TPAREAD", "TPAWRITE",
    "WAIT", "WAITFOR", "WRUNET", "WRUSYS", "WRUSYSDOOR",
];

const BUILTIN_FUNCTIONS: &[&str] = &[
    "ABS", "ADJTIME", "AND", "BAND", "BNOT", "BOR", "BXOR", "CALLID",
    "CALLNUM", "CARRIER", "CCTYPE", "CDON", "CHATSTAT", "CONFALIAS",
    "CONFEXP", "CONFMW", "CONFREG", "CONFSEL", "CONFSYS", "CRC32",
    "CURCOLOR", "CURCONF", "CURSEC", "CURUSER", "DAY", "DEFANS", "DOW",
    "EVTTIMEADJ", "EXIST", "FERR", "FILEINF", "FLAGCNT", "FMTCC",
    "FMTREAL", "GETX", "GETY", "GRAFMODE", "HIMSGNUM", "HOUR", "I2S",
    "INKEY", "INSTR", "INSTRR", "ISBITSET", "KBDBUFSIZE", "KBDFILUSED",
    "KINKEY", "LANGEXT", "LASTANS", "LEFT", "LEN", "LOMSGNUM", "LOWER",
    "LTRIM", "MASK_ALNUM", "MASK_ALPHA", "MASK_ASCII", "MASK_FILE",
    "MASK_NUM", "MASK_PATH", "MASK_PWD", "MAX", "MEGANUM", "MID", "MIN",
    "MIXED", "MKADDR", "MKDATE", "MONTH", "NOCHAR", "ONLOCAL", "OR",
    "PAGESTAT", "PCBACCOUNT", "PCBACCSTAT", "PCBNODE", "PPE_RNAME",
    "PPLBUFSIZE", "PSA", "RANDOM", "READLINE", "REGAH", "REGAL", "REGAX",
    "REGBH", "REGBL", "REGBX", "REGCF", "REGCH", "REGCL", "REGCX", "REGDH",
    "REGDI", "REGDL", "REGDS", "REGDX", "REGES", "REGF", "REGSI",
    "REPLACE", "REPLACESTR", "RIGHT", "RTRIM", "S2I", "SEC", "SPACE",
    "STRIP", "STRIPATX", "STRIPSTR", "TIMEAP", "TINKEY", "TOBIGSTR",
    "TOBOOLEAN", "TOBYTE", "TODATE", "TODDATE", "TODREAL", "TOEDATE",
    "TOINTEGER", "TOMONEY", "TOREAL", "TOSBYTE", "TOSWORD", "TOTIME",
    "TOUNSIGNED", "TOWORD", "TRIM", "UNIXTIME", "UN_CITY", "UN_NAME",
    "UN_OPER", "UN_STAT", "UPPER", "USERALIAS", "U_LMR", "VALCC",
    "VALDATE", "VALTIME", "XOR", "YEAR",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(KEYWORDS.is_sorted_by_key(|(name, _)| *name));
        assert!(DIRECTIVES.is_sorted_by_key(|(name, _)| *name));
        assert!(TYPES.is_sorted());
        assert!(BUILTIN_STATEMENTS.is_sorted());
        assert!(BUILTIN_FUNCTIONS.is_sorted());
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("println"), BUILTIN_STATEMENT);
        assert_eq!(classify("PrintLn"), BUILTIN_STATEMENT);
        assert_eq!(classify("string"), TYPE_NAME);
        assert_eq!(classify("Mid"), BUILTIN_FUNCTION);
        assert_eq!(classify("endwhile"), ENDWHILE_KW);
        assert_eq!(classify("my_var"), IDENT);
    }

    #[test]
    fn underscore_names_resolve() {
        assert_eq!(classify("u_lmr"), BUILTIN_FUNCTION);
        assert_eq!(classify("UN_NAME"), BUILTIN_FUNCTION);
        assert_eq!(classify("mask_pwd"), BUILTIN_FUNCTION);
        assert_eq!(classify("unixtime"), BUILTIN_FUNCTION);
    }
}
