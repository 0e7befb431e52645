/// Section headings of the english cheatsheet and their chinese titles.
pub const DEFAULT_HEADING_PAIRS: &[(&str, &str)] = &[
	("Text Processing", "文本处理"),
	("Binary Data", "二进制数据"),
	("Data Type", "数据类型"),
	("Mathematical Modules", "数学模块"),
	("Functional Programming", "函数式编程"),
	("Directory Access", "目录访问"),
	("Data Persistence", "数据持久化"),
	("Data Compression", "数据压缩"),
	("File Formats", "文件格式"),
	("Cryptographic Services", "加密服务"),
	("Operating System", "操作系统"),
	("Networking Communication", "网络通信"),
	("Internet Data", "互联网数据"),
	("Structured Markup", "结构化标记"),
	("Internet Protocols", "互联网协议"),
	("Multimedia Services", "多媒体服务"),
	("Program Frameworks", "程序框架"),
	("Graphical Interfaces", "图形化用户界面"),
	("Development Tools", "开发工具"),
	("Debugging Profiling", "调试和分析"),
	("Software Packaging", "软件打包与分发"),
	("Runtime Services", "运行时服务"),
	("Importing Modules", "导入模块"),
	("Language Services", "Python 语言服务"),
	("Bonus Scene", "彩蛋"),
];

/// Produces the translated edition of a document from the english one.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
	/// The english summary block and its translation. Every occurrence is
	/// replaced.
	pub summary: Option<(String, String)>,
	/// Heading pairs applied in order, first occurrence only.
	pub pairs: Vec<(String, String)>,
}

impl Localizer {
	pub fn new(pairs: Vec<(String, String)>) -> Self {
		Self {
			summary: None,
			pairs,
		}
	}

	#[must_use]
	pub fn with_summary(mut self, english: impl Into<String>, translated: impl Into<String>) -> Self {
		self.summary = Some((english.into(), translated.into()));
		self
	}

	pub fn localize(&self, text: &str) -> String {
		let mut localized = match &self.summary {
			Some((english, translated)) if !english.is_empty() => {
				text.replace(english.as_str(), translated)
			}
			_ => text.to_string(),
		};

		for (english, translated) in &self.pairs {
			if english.is_empty() {
				continue;
			}
			localized = localized.replacen(english.as_str(), translated, 1);
		}

		localized
	}
}
