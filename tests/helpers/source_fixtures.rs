//! Common source code fixtures for tests.

pub const STRUCT_AND_FUNCTION: &str = "struct Foo {\n  bar: Int,\n}\nfn baz() {}\n";

pub const UNTERMINATED_FUNCTION: &str = "fn broken(";

pub const RENAME_WITH_COMMENT: &str = "let x = 1; // x is one\nlet y = x + x;";

pub const FUZZY_CANDIDATES: &str = "fn fetchUser() {}\nfn fetch() {}\nfn userFetch() {}\n";

pub const NESTED_MODULES: &str = r#"
mod network {
    pub struct Connection {
        pub addr: String,
        retries: u8,
    }

    impl Connection {
        pub fn open(addr: &str, retries: u8) -> Self {
            Connection { addr: addr.to_string(), retries }
        }
    }

    pub mod tls {
        pub trait Handshake {
            fn handshake(&mut self) -> bool;
        }
    }
}

fn main() {
    let conn = network::Connection::open("localhost", 3);
}
"#;

pub const TRICKY_LEXING: &str = r####"
// fn in_line_comment() {}
/* struct InBlock {} */
# fn in_hash_comment() {}
#[derive(Debug)]
struct Real<'a> { name: &'a str }
const S: &str = "fn in_string() { \" }";
const R: &str = r#"struct InRaw { "quoted" }"#;
const C: char = '{';
fn after_all<'b>(x: &'b str) -> &'b str { x }
"####;
