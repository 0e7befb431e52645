use std::collections::HashSet;

use regex::Regex;

pub fn title_document() -> &'static str {
	"# Title\n\n```python\n>>> a = 5\n>>> print(a)\n5\n```\n\nMore text.\n"
}

/// A cheatsheet section with two python transcripts and a shell block.
pub fn cheatsheet_document() -> &'static str {
	r#"## random

Generate pseudo-random numbers.

```python
>>> import random
>>> random.randint(1, 10)
7
>>> for i in range(2):
...     print(i)
...
0
1
```

Install it:

```
pip install nothing
```

```python
>>> name = "world"
>>> print(f"hello {name}")
hello world
```
"#
}

pub fn deny_patterns(patterns: &[&str]) -> Vec<Regex> {
	patterns
		.iter()
		.map(|pattern| Regex::new(pattern).unwrap_or_else(|e| panic!("pattern: {e}")))
		.collect()
}

pub fn deny_statements(statements: &[&str]) -> HashSet<String> {
	statements.iter().map(ToString::to_string).collect()
}

pub fn contents_document() -> &'static str {
	"# Cheatsheet\n\n## Contents\n\n- [``string``](#string)\n- [``re``](#re)\n\n## string\n\nText \
	 constants.\n\n## struct\n\nBinary data.\n"
}
