//! Keyword and operator vocabulary for the MySQL/TiDB dialect.
//!
//! # Layout
//!
//! - [`keywords()`]: every keyword spelling with its token id and
//!   [`KeywordCategory`]. Ids are allocated in table order by
//!   `define_keywords!`, which also emits one `TokenKind` constant per entry
//!   (`TokenKind::SELECT`, `TokenKind::AUTO_RANDOM`, ...).
//! - [`aliases()`]: alternate spellings that share the id of a canonical
//!   keyword (`SCHEMA` scans as `DATABASE`).
//! - [`window_function_keywords()`]: the subset that only resolves while
//!   window functions are enabled.
//! - The operator table used by the scanner's punctuation path, matched
//!   longest-first.
//!
//! # Lookup
//!
//! [`lookup`] is case-insensitive. The identifier is upper-cased into a
//! stack buffer (anything longer than the longest keyword, or not ASCII, is
//! rejected before hashing) and probed in a lazily built `FxHashMap`.
//! Whether a resolved keyword is actually used as one (qualified names,
//! the window-function switch) is the scanner's decision.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::{TokenKind, KEYWORD_BASE};

/// Reservation class of a keyword.
///
/// Consumed by tooling that cross-checks the table against the grammar and
/// against a live server's reserved-word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Reserved in MySQL: needs quoting to be used as an identifier.
    Reserved,
    /// A keyword the grammar also accepts as an identifier.
    Unreserved,
    /// Builtin function names and other words the grammar recognises in
    /// specific positions only.
    NotKeyword,
    /// TiDB extensions with no MySQL counterpart.
    DialectSpecific,
}

/// One keyword table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyword {
    /// Upper-case canonical spelling.
    pub text: &'static str,
    pub kind: TokenKind,
    pub category: KeywordCategory,
}

impl Keyword {
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.category == KeywordCategory::Reserved
    }
}

macro_rules! define_keywords {
    ( $( $category:ident : [ $( $kw:ident ),* $(,)? ] )* ) => {
        #[allow(non_camel_case_types, dead_code, clippy::upper_case_acronyms)]
        #[repr(u16)]
        enum Ordinal {
            Base = KEYWORD_BASE,
            $( $( $kw, )* )*
        }

        impl TokenKind {
            $( $( pub const $kw: Self = Self(Ordinal::$kw as u16); )* )*
        }

        static KEYWORDS: &[Keyword] = &[
            $( $(
                Keyword {
                    text: stringify!($kw),
                    kind: TokenKind::$kw,
                    category: KeywordCategory::$category,
                },
            )* )*
        ];
    };
}

define_keywords! {
    Reserved: [
        ADD, ALL, ALTER, ANALYZE, AND, AS, ASC, BETWEEN, BIGINT, BINARY, BLOB, BOTH, BY,
        CALL, CASCADE, CASE, CHANGE, CHAR, CHARACTER, CHECK, COLLATE, COLUMN, CONSTRAINT,
        CONTINUE, CONVERT, CREATE, CROSS, CUME_DIST, CURRENT_DATE, CURRENT_ROLE,
        CURRENT_TIME, CURRENT_TIMESTAMP, CURRENT_USER, CURSOR, DATABASE, DATABASES,
        DAY_HOUR, DAY_MICROSECOND, DAY_MINUTE, DAY_SECOND, DECIMAL, DEFAULT, DELAYED,
        DELETE, DENSE_RANK, DESC, DESCRIBE, DISTINCT, DISTINCTROW, DIV, DOUBLE, DROP, DUAL,
        ELSE, ELSEIF, ENCLOSED, ESCAPED, EXCEPT, EXISTS, EXIT, EXPLAIN, FALSE, FETCH,
        FIRST_VALUE, FLOAT, FLOAT4, FLOAT8, FOR, FORCE, FOREIGN, FROM, FULLTEXT, GENERATED,
        GRANT, GROUP, GROUPS, HAVING, HIGH_PRIORITY, HOUR_MICROSECOND, HOUR_MINUTE,
        HOUR_SECOND, IF, IGNORE, IN, INDEX, INFILE, INNER, INOUT, INSERT, INT, INT1, INT2,
        INT3, INT4, INT8, INTEGER, INTERSECT, INTERVAL, INTO, IS, ITERATE, JOIN, KEY, KEYS,
        KILL, LAG, LAST_VALUE, LEAD, LEADING, LEAVE, LEFT, LIKE, LIMIT, LINEAR, LINES,
        LOAD, LOCALTIME, LOCALTIMESTAMP, LOCK, LONG, LONGBLOB, LONGTEXT, LOW_PRIORITY,
        MATCH, MAXVALUE, MEDIUMBLOB, MEDIUMINT, MEDIUMTEXT, MIDDLEINT, MINUTE_MICROSECOND,
        MINUTE_SECOND, MOD, NATURAL, NOT, NO_WRITE_TO_BINLOG, NTH_VALUE, NTILE, NULL,
        NUMERIC, OF, ON, OPTIMIZE, OPTION, OPTIONALLY, OR, ORDER, OUT, OUTER, OVER,
        PARTITION, PERCENT_RANK, PRECISION, PRIMARY, PROCEDURE, RANGE, RANK, READ, REAL,
        RECURSIVE, REFERENCES, REGEXP, RELEASE, RENAME, REPEAT, REPLACE, REQUIRE, RESTRICT,
        REVOKE, RIGHT, RLIKE, ROW, ROWS, ROW_NUMBER, SECOND_MICROSECOND, SELECT, SET, SHOW,
        SMALLINT, SPATIAL, SQL, SQLEXCEPTION, SQLSTATE, SQLWARNING, SQL_BIG_RESULT,
        SQL_CALC_FOUND_ROWS, SQL_SMALL_RESULT, SSL, STARTING, STORED, STRAIGHT_JOIN, TABLE,
        TABLESAMPLE, TERMINATED, THEN, TINYBLOB, TINYINT, TINYTEXT, TO, TRAILING, TRIGGER,
        TRUE, UNION, UNIQUE, UNLOCK, UNSIGNED, UNTIL, UPDATE, USAGE, USE, USING, UTC_DATE,
        UTC_TIME, UTC_TIMESTAMP, VALUES, VARBINARY, VARCHAR, VARCHARACTER, VARYING,
        VIRTUAL, WHEN, WHERE, WHILE, WINDOW, WITH, WRITE, XOR, YEAR_MONTH, ZEROFILL,
    ]
    Unreserved: [
        ACTION, ADVISE, AFTER, AGAINST, AGO, ALGORITHM, ALWAYS, ANY, ASCII, ATTRIBUTE,
        ATTRIBUTES, AUTO_ID_CACHE, AUTO_INCREMENT, AUTO_RANDOM, AUTO_RANDOM_BASE, AVG,
        AVG_ROW_LENGTH, BACKEND, BACKUP, BACKUPS, BEGIN, BERNOULLI, BINDING, BINDINGS,
        BINDING_CACHE, BINLOG, BIT, BLOCK, BOOL, BOOLEAN, BTREE, BYTE, CACHE, CALIBRATE,
        CAPTURE, CASCADED, CAUSAL, CHAIN, CHARSET, CHECKPOINT, CHECKSUM, CIPHER, CLEANUP,
        CLIENT, CLIENT_ERRORS_SUMMARY, CLOSE, CLUSTER, CLUSTERED, COALESCE, COLLATION,
        COLUMNS, COLUMN_FORMAT, COMMENT, COMMIT, COMMITTED, COMPACT, COMPRESSED,
        COMPRESSION, CONCURRENCY, CONNECTION, CONSISTENCY, CONSISTENT, CONTEXT, CPU,
        CSV_BACKSLASH_ESCAPE, CSV_DELIMITER, CSV_HEADER, CSV_NOT_NULL, CSV_NULL,
        CSV_SEPARATOR, CSV_TRIM_LAST_SEPARATORS, CURRENT, CYCLE, DATA, DATE, DATETIME, DAY,
        DEALLOCATE, DECLARE, DEFINER, DELAY_KEY_WRITE, DIGEST, DIRECTORY, DISABLE,
        DISABLED, DISCARD, DISK, DO, DUPLICATE, DYNAMIC, ENABLE, ENABLED, ENCRYPTION, END,
        ENFORCED, ENGINE, ENGINES, ENUM, ERROR, ERRORS, ESCAPE, EVENT, EVENTS, EVOLVE,
        EXCHANGE, EXCLUSIVE, EXECUTE, EXPANSION, EXPIRE, EXTENDED, FAILED_LOGIN_ATTEMPTS,
        FAULTS, FIELDS, FILE, FIRST, FIXED, FLUSH, FOLLOWING, FORMAT, FOUND, FULL,
        FUNCTION, GENERAL, GLOBAL, GRANTS, HANDLER, HASH, HELP, HISTOGRAM, HISTORY, HOSTS,
        HOUR, IDENTIFIED, IMPORT, IMPORTS, INCREMENT, INCREMENTAL, INDEXES, INSERT_METHOD,
        INSTANCE, INVISIBLE, INVOKER, IO, IPC, ISOLATION, ISSUER, JSON, KEY_BLOCK_SIZE,
        LABELS, LANGUAGE, LAST, LASTVAL, LAST_BACKUP, LESS, LEVEL, LIST, LOCAL, LOCATION,
        LOCKED, LOGS, MASTER, MAX_CONNECTIONS_PER_HOUR, MAX_IDXNUM, MAX_MINUTES,
        MAX_QUERIES_PER_HOUR, MAX_ROWS, MAX_UPDATES_PER_HOUR, MAX_USER_CONNECTIONS, MB,
        MEMBER, MEMORY, MERGE, MICROSECOND, MINUTE, MINVALUE, MIN_ROWS, MODE, MODIFY,
        MONTH, NAMES, NATIONAL, NCHAR, NEVER, NEXT, NEXTVAL, NO, NOCACHE, NOCYCLE,
        NODEGROUP, NOMAXVALUE, NOMINVALUE, NONCLUSTERED, NONE, NOORDER, NOWAIT, NULLS,
        NVARCHAR, OFF, OFFSET, OLTP_READ_ONLY, OLTP_READ_WRITE, OLTP_WRITE_ONLY, ONLINE,
        ONLY, ON_DUPLICATE, OPEN, OPTIONAL, PACK_KEYS, PAGE, PARSER, PARTIAL, PARTITIONING,
        PARTITIONS, PASSWORD, PASSWORD_LOCK_TIME, PAUSE, PERCENT, PER_DB, PER_TABLE,
        PLUGINS, POINT, POLICY, PRECEDING, PREPARE, PRESERVE, PRE_SPLIT_REGIONS,
        PRIVILEGES, PROCESS, PROCESSLIST, PROFILE, PROFILES, PROXY, PURGE, QUARTER,
        QUERIES, QUERY, QUICK, RATE_LIMIT, REBUILD, RECOVER, REDUNDANT, RELOAD, REMOVE,
        REORGANIZE, REPAIR, REPEATABLE, REPLICA, REPLICAS, REPLICATION, REQUIRED, RESOURCE,
        RESPECT, RESTART, RESTORE, RESTORES, RESUME, REUSE, REVERSE, ROLE, ROLLBACK,
        ROLLUP, ROUTINE, ROW_COUNT, ROW_FORMAT, RTREE, SAN, SAVEPOINT, SECOND, SECONDARY,
        SECONDARY_ENGINE, SECONDARY_LOAD, SECONDARY_UNLOAD, SECURITY,
        SEND_CREDENTIALS_TO_TIKV, SEPARATOR, SEQUENCE, SERIAL, SERIALIZABLE, SESSION,
        SETVAL, SHARD_ROW_ID_BITS, SHARE, SHARED, SHUTDOWN, SIGNED, SIMPLE, SKIP,
        SKIP_SCHEMA_FILES, SLAVE, SLOW, SNAPSHOT, SOME, SOURCE, SQL_BUFFER_RESULT,
        SQL_CACHE, SQL_NO_CACHE, SQL_TSI_DAY, SQL_TSI_HOUR, SQL_TSI_MINUTE, SQL_TSI_MONTH,
        SQL_TSI_QUARTER, SQL_TSI_SECOND, SQL_TSI_WEEK, SQL_TSI_YEAR, START,
        STATS_AUTO_RECALC, STATS_COL_CHOICE, STATS_COL_LIST, STATS_OPTIONS,
        STATS_PERSISTENT, STATS_SAMPLE_PAGES, STATS_SAMPLE_RATE, STATUS, STORAGE,
        STRICT_FORMAT, SUBJECT, SUBPARTITION, SUBPARTITIONS, SUPER, SWAPS, SWITCHES,
        SYSTEM, SYSTEM_TIME, TABLES, TABLESPACE, TABLE_CHECKSUM, TEMPORARY, TEMPTABLE,
        TEXT, THAN, TIKV_IMPORTER, TIME, TIMESTAMP, TRACE, TRADITIONAL, TRANSACTION,
        TRIGGERS, TRUNCATE, TTL, TTL_ENABLE, TTL_JOB_INTERVAL, TYPE, UNBOUNDED,
        UNCOMMITTED, UNDEFINED, UNICODE, UNKNOWN, UNSET, USER, VALIDATION, VALUE,
        VARIABLES, VIEW, VISIBLE, WAIT, WARNINGS, WEEK, WEIGHT_STRING, WITHOUT, WORKLOAD,
        X509, YEAR,
    ]
    NotKeyword: [
        ADDDATE, APPROX_COUNT_DISTINCT, APPROX_PERCENTILE, BIT_AND, BIT_OR, BIT_XOR, BOUND,
        BRIEF, CAST, COPY, COUNT, CURDATE, CURTIME, DATE_ADD, DATE_SUB, DEFINED, DOT, DUMP,
        EXACT, EXTRACT, FLASHBACK, FOLLOWER, FOLLOWERS, GET_FORMAT, GROUP_CONCAT, HNSW,
        INPLACE, INSTANT, INTERNAL, LEADER, LEADER_CONSTRAINTS, LEARNER, LEARNERS, LOG,
        MAX, MIN, NOW, POSITION, PRIMARY_REGION, RECENT, REPLAYER, RUNNING, SCHEDULE,
        SESSION_USER, STALENESS, STD, STDDEV, STDDEV_POP, STDDEV_SAMP, STOP, STRICT,
        STRONG, SUBDATE, SUBSTRING, SUM, SYSDATE, SYSTEM_USER, TIMESTAMPADD, TIMESTAMPDIFF,
        TLS, TOKEN_ISSUER, TOP, TRIM, VARIANCE, VAR_POP, VAR_SAMP, VERBOSE, VOTER, VOTERS,
    ]
    DialectSpecific: [
        ADMIN, BATCH, BUCKETS, BUILTINS, CANCEL, CARDINALITY, CMSKETCH, COLUMN_STATS_USAGE,
        CORRELATION, DDL, DEPENDENCY, DEPTH, DRAINER, DRY, JOB, JOBS, NODE_ID, NODE_STATE,
        OPTIMISTIC, PESSIMISTIC, PUMP, REGION, REGIONS, RESET, RUN, SAMPLERATE, SAMPLES,
        SESSION_STATES, SPLIT, STATISTICS, STATS, STATS_BUCKETS, STATS_EXTENDED,
        STATS_HEALTHY, STATS_HISTOGRAMS, STATS_LOCKED, STATS_META, STATS_TOPN, TELEMETRY,
        TELEMETRY_ID, TIDB, TIFLASH, TOPN, WIDTH,
    ]
}

/// Alternate spelling → canonical spelling. Both scan to the canonical id.
static ALIASES: &[(&str, &str)] = &[
    ("DEC", "DECIMAL"),
    ("SCHEMA", "DATABASE"),
    ("SCHEMAS", "DATABASES"),
    ("SUBSTR", "SUBSTRING"),
];

static WINDOW_FUNCTIONS: &[TokenKind] = &[
    TokenKind::CUME_DIST,
    TokenKind::DENSE_RANK,
    TokenKind::FIRST_VALUE,
    TokenKind::GROUPS,
    TokenKind::LAG,
    TokenKind::LAST_VALUE,
    TokenKind::LEAD,
    TokenKind::NTH_VALUE,
    TokenKind::NTILE,
    TokenKind::OVER,
    TokenKind::PERCENT_RANK,
    TokenKind::RANK,
    TokenKind::ROWS,
    TokenKind::ROW_NUMBER,
    TokenKind::WINDOW,
];

/// Multi-character operators and the single characters that map to a named
/// token, longest spellings first.
static OPERATORS: &[(&str, TokenKind)] = &[
    ("<=>", TokenKind::NULL_EQ),
    ("->>", TokenKind::JSON_UNQUOTE_EXTRACT),
    ("||", TokenKind::PIPES),
    ("&&", TokenKind::AND_AND),
    ("&^", TokenKind::AND_NOT),
    (":=", TokenKind::ASSIGNMENT_EQ),
    (">=", TokenKind::GE),
    ("<=", TokenKind::LE),
    ("!=", TokenKind::NEQ),
    ("<>", TokenKind::NEQ_SYNONYM),
    ("<<", TokenKind::LSH),
    (">>", TokenKind::RSH),
    ("->", TokenKind::JSON_EXTRACT),
    ("\\N", TokenKind::NULL),
    ("=", TokenKind::EQ),
    ("?", TokenKind::PARAM_MARKER),
];

/// Characters that are tokens on their own, with id = byte value.
const PUNCTUATION: &[u8] = b"!%&()*+,-./:;<>[\\]^{|}~";

/// Upper bound on keyword length; longer identifiers skip the hash probe.
const MAX_KEYWORD_LEN: usize = 32;

static LOOKUP: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map =
        FxHashMap::with_capacity_and_hasher(KEYWORDS.len() + ALIASES.len(), Default::default());
    for kw in KEYWORDS {
        map.insert(kw.text, kw.kind);
    }
    for &(alias, canonical) in ALIASES {
        if let Some(&kind) = map.get(canonical) {
            map.insert(alias, kind);
        }
    }
    map
});

/// Case-insensitive keyword lookup, aliases included.
pub fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if len == 0 || len > MAX_KEYWORD_LEN || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    for (dst, &b) in buf.iter_mut().zip(bytes) {
        if !b.is_ascii() {
            return None;
        }
        *dst = b.to_ascii_uppercase();
    }
    let upper = std::str::from_utf8(&buf[..len]).ok()?;
    LOOKUP.get(upper).copied()
}

/// Canonical spelling of a keyword id.
pub fn spelling(kind: TokenKind) -> Option<&'static str> {
    let index = kind.keyword_index()?;
    KEYWORDS.get(index).map(|kw| kw.text)
}

/// Category of a keyword id.
pub fn category(kind: TokenKind) -> Option<KeywordCategory> {
    let index = kind.keyword_index()?;
    KEYWORDS.get(index).map(|kw| kw.category)
}

/// Every keyword, in id order.
pub fn keywords() -> &'static [Keyword] {
    KEYWORDS
}

/// Keywords of one category, in id order.
pub fn keywords_in(category: KeywordCategory) -> impl Iterator<Item = &'static Keyword> {
    KEYWORDS.iter().filter(move |kw| kw.category == category)
}

/// Alternate spelling → canonical spelling pairs.
pub fn aliases() -> &'static [(&'static str, &'static str)] {
    ALIASES
}

/// Keywords that are only keywords while window functions are enabled.
pub fn window_function_keywords() -> &'static [TokenKind] {
    WINDOW_FUNCTIONS
}

#[inline]
pub fn is_window_function(kind: TokenKind) -> bool {
    WINDOW_FUNCTIONS.contains(&kind)
}

/// Longest operator or punctuation token at the start of `rest`, with its
/// length in bytes.
pub fn operator(rest: &[u8]) -> Option<(TokenKind, usize)> {
    let first = *rest.first()?;
    if let Some(&(op, kind)) = OPERATORS
        .iter()
        .find(|(op, _)| rest.starts_with(op.as_bytes()))
    {
        return Some((kind, op.len()));
    }
    PUNCTUATION
        .contains(&first)
        .then_some((TokenKind::from_byte(first), 1))
}

#[cfg(test)]
mod tests;
