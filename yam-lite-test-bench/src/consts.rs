pub const MAP_SIMPLE_INPUT: &str = r"
a: 1
b: 2
";
pub const MAP_SIMPLE_EVENTS: &str = r"
+MAP
=STR :a
=INT 1
=STR :b
=INT 2
-MAP";

pub const MAP_DUPLICATE_INPUT: &str = r"
a: 1
b: 2
a: 3
";
pub const MAP_DUPLICATE_EVENTS: &str = r"
+MAP
=STR :a
=INT 3
=STR :b
=INT 2
-MAP";

pub const SEQ_SIMPLE_INPUT: &str = r"
- 1
- 2
- 3
";
pub const SEQ_SIMPLE_EVENTS: &str = r"
+SEQ
=INT 1
=INT 2
=INT 3
-SEQ";

pub const NESTED_INPUT: &str = r"
server:
  host: example.org
  ports:
    - 80
    - 443
  tls: true
name: demo
";
pub const NESTED_EVENTS: &str = r"
+MAP
=STR :name
=STR :demo
=STR :server
+MAP
=STR :host
=STR :example.org
=STR :ports
+SEQ
=INT 80
=INT 443
-SEQ
=STR :tls
=BOOL true
-MAP
-MAP";

pub const SEQ_OF_MAPS_INPUT: &str = r"
- name: a
  size: 1
- name: b
";
pub const SEQ_OF_MAPS_EVENTS: &str = r"
+SEQ
+MAP
=STR :name
=STR :a
=STR :size
=INT 1
-MAP
+MAP
=STR :name
=STR :b
-MAP
-SEQ";

pub const NESTED_SEQ_INPUT: &str = r"
- - 1
  - 2
- 3
";
pub const NESTED_SEQ_EVENTS: &str = r"
+SEQ
+SEQ
=INT 1
=INT 2
-SEQ
=INT 3
-SEQ";

pub const EMPTY_VALUES_INPUT: &str = r"
a:
b:
  c:
";
pub const EMPTY_VALUES_EVENTS: &str = r"
+MAP
=STR :a
=NULL
=STR :b
+MAP
=STR :c
=NULL
-MAP
-MAP";

pub const TRAILING_NULL_INPUT: &str = r"
list:
  - 1
  -
other: x
";
pub const TRAILING_NULL_EVENTS: &str = r"
+MAP
=STR :list
+SEQ
=INT 1
=NULL
-SEQ
=STR :other
=STR :x
-MAP";

pub const PLAIN_MULTI_INPUT: &str = r"
key:
  this is
  a long value
next: 1
";
pub const PLAIN_MULTI_EVENTS: &str = r"
+MAP
=STR :key
=STR :this is a long value
=STR :next
=INT 1
-MAP";

pub const COMMENTS_INPUT: &str = r"
# header
a: 1 # trailing
b: [1, 2] # flow
c: a#b
";
pub const COMMENTS_EVENTS: &str = r"
+MAP
=STR :a
=INT 1
=STR :b
+SEQ
=INT 1
=INT 2
-SEQ
=STR :c
=STR :a#b
-MAP";

pub const QUOTED_KEY_INPUT: &str = r#"
"first key": 1
"with: colon": "value: quoted"
"#;
pub const QUOTED_KEY_EVENTS: &str = r"
+MAP
=STR :first key
=INT 1
=STR :with: colon
=STR :value: quoted
-MAP";

pub const SEQ_UNDER_KEY_ERR_INPUT: &str = r"
a:
- 1
";

pub const COERCE_INPUT: &str = r"
- 010
- 0x1F
- -5
- +7
- 1.5e2
- 12e5
- 5.
- .5
- 1e5
- 09
- null
- true
- false
- True
";
pub const COERCE_EVENTS: &str = r"
+SEQ
=INT 8
=INT 31
=INT -5
=INT 7
=FLT 150.0
=FLT 1200000.0
=STR :5.
=STR :.5
=STR :1e5
=STR :09
=NULL
=BOOL true
=BOOL false
=STR :True
-SEQ";

pub const LITERAL_INPUT: &str = r"
s: |
  line1
  line2
";
pub const LITERAL_EVENTS: &str = r"
+MAP
=STR :s
=STR :line1\nline2\n
-MAP";

pub const LITERAL_INDENTED_INPUT: &str = r"
code: |
  fn main() {
      body();
  }

after: 1
";
pub const LITERAL_INDENTED_EVENTS: &str = r"
+MAP
=STR :after
=INT 1
=STR :code
=STR :fn main() {\n    body();\n}\n\n
-MAP";

pub const LITERAL_STRIP_INPUT: &str = r"
s: |-
  text

t: 1
";
pub const LITERAL_STRIP_EVENTS: &str = r"
+MAP
=STR :s
=STR :text
=STR :t
=INT 1
-MAP";

pub const FOLDED_INPUT: &str = r"
f: >
  one
  two
    deeper
  three
";
pub const FOLDED_EVENTS: &str = r"
+MAP
=STR :f
=STR :one two\n  deeper\nthree\n
-MAP";

pub const QUOTED_INPUT: &str = r#"
- "a\tb"
- "line\nbreak"
- "\u00e9\ud83d\ude00"
- "010"
- ""
"#;
pub const QUOTED_EVENTS: &str = r"
+SEQ
=STR :a\tb
=STR :line\nbreak
=STR :é😀
=STR :010
=STR :
-SEQ";

pub const FLOW_NESTED_INPUT: &str = r"
{a: [1, {b: 2}], c: x y}
";
pub const FLOW_NESTED_EVENTS: &str = r"
+MAP
=STR :a
+SEQ
=INT 1
+MAP
=STR :b
=INT 2
-MAP
-SEQ
=STR :c
=STR :x y
-MAP";

pub const FLOW_EMPTY_INPUT: &str = r"
- {}
- []
- [a, b,]
";
pub const FLOW_EMPTY_EVENTS: &str = r"
+SEQ
+MAP
-MAP
+SEQ
-SEQ
+SEQ
=STR :a
=STR :b
-SEQ
-SEQ";

pub const FLOW_HASH_INPUT: &str = r"
- [1,#2]
- {a: 1,#b: 2} # note
";
pub const FLOW_HASH_EVENTS: &str = r"
+SEQ
+SEQ
=INT 1
=STR :#2
-SEQ
+MAP
=STR :#b
=INT 2
=STR :a
=INT 1
-MAP
-SEQ";

pub const FLOW_MULTILINE_INPUT: &str = r#"
k: [1,
  "two",
  {three: 3}]
"#;
pub const FLOW_MULTILINE_EVENTS: &str = r"
+MAP
=STR :k
+SEQ
=INT 1
=STR :two
+MAP
=STR :three
=INT 3
-MAP
-SEQ
-MAP";

pub const FLOW_KEYS_INPUT: &str = r"
{1: a, true: b, c}
";
pub const FLOW_KEYS_EVENTS: &str = r"
+MAP
=BOOL true
=STR :b
=INT 1
=STR :a
=STR :c
=NULL
-MAP";

pub const FLOW_UNCLOSED_INPUT: &str = r"
k: [1, 2
";

pub const ANCHOR_INPUT: &str = r"
a: &x 1
b: *x
";
pub const ANCHOR_EVENTS: &str = r"
+MAP
=STR :a
=INT 1
=STR :b
=INT 1
-MAP";

pub const ANCHOR_FORWARD_INPUT: &str = r"
b: *x
a: &x 1
";

pub const ANCHOR_MAP_INPUT: &str = r"
base: &b
  k: v
copy: *b
";
pub const ANCHOR_MAP_EVENTS: &str = r"
+MAP
=STR :base
+MAP
=STR :k
=STR :v
-MAP
=STR :copy
+MAP
=STR :k
=STR :v
-MAP
-MAP";

pub const ANCHOR_REDEFINE_INPUT: &str = r"
- &x 1
- *x
- &x 2
- *x
";
pub const ANCHOR_REDEFINE_EVENTS: &str = r"
+SEQ
=INT 1
=INT 1
=INT 2
=INT 2
-SEQ";

pub const DOCS_TWO_INPUT: &str = r"---
a: 1
---
b: 2
";
pub const DOCS_TWO_EVENTS: &str = r"
+SEQ
+MAP
=STR :a
=INT 1
-MAP
+MAP
=STR :b
=INT 2
-MAP
-SEQ";

pub const DOCS_THREE_INPUT: &str = r"--- 1
--- 2
--- 3
";
pub const DOCS_THREE_EVENTS: &str = r"
+SEQ
=INT 1
=INT 2
=INT 3
-SEQ";

pub const DOCS_END_INPUT: &str = r"
a: 1
...
";
pub const DOCS_END_EVENTS: &str = r"
+MAP
=STR :a
=INT 1
-MAP";

pub const DOCS_EMPTY_FIRST_INPUT: &str = r"---
---
a: 1
";
pub const DOCS_EMPTY_FIRST_EVENTS: &str = r"
+SEQ
=NULL
+MAP
=STR :a
=INT 1
-MAP
-SEQ";

pub const DOCS_SHARED_ANCHOR_INPUT: &str = r"
a: &x [1, 2]
---
b: *x
";
pub const DOCS_SHARED_ANCHOR_EVENTS: &str = r"
+SEQ
+MAP
=STR :a
+SEQ
=INT 1
=INT 2
-SEQ
-MAP
+MAP
=STR :b
+SEQ
=INT 1
=INT 2
-SEQ
-MAP
-SEQ";

pub const EMPTY_EVENTS: &str = r"
=NULL";

pub const ERR_EVENTS: &str = r"
ERR";

pub const ROUNDTRIP_INPUT: &str = r#"
name: demo
count: 3
ratio: 0.5
enabled: false
empty:
tags:
  - "010"
  - plain words
  - "a: b"
nested:
  - x: 1
    y: [1, 2]
  - []
"#;
pub const ROUNDTRIP_OUTPUT: &str = r#"---
count: 3
empty: null
enabled: false
name: demo
nested:
  - x: 1
    y:
      - 1
      - 2
  - []
ratio: 0.5
tags:
  - "010"
  - plain words
  - "a: b"
"#;
