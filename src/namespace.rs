//! Static namespace index.
//!
//! A hierarchical catalog of well-known Java packages and classes,
//! modelled as a strictly-typed tree: a node is either a `Branch` with
//! named children or a `Leaf` (a terminal class name). The index is
//! built once at `Backend` construction and shared read-only by every
//! session.

/// One node of the namespace tree.
///
/// Child names are unique within a parent and their order is the
/// presentation order of completions. The structure is a tree, so no
/// cycles by construction.
#[derive(Debug, Clone)]
pub enum NamespaceNode {
    /// A package (or outer class) with named children.
    Branch(Vec<(&'static str, NamespaceNode)>),
    /// A terminal symbol, e.g. a class.
    Leaf,
}

impl NamespaceNode {
    /// Descend the tree along `qualifier_path` (exact segment match) and
    /// enumerate the resolved node's children whose names start with
    /// `prefix`.
    ///
    /// An unresolved segment, or a path that descends into a leaf,
    /// yields an empty list: the path simply does not resolve, which is
    /// not an error. The empty prefix matches all children. Matching is
    /// case-sensitive and literal; leaves and sub-branches are treated
    /// identically as candidates.
    pub fn lookup(&self, qualifier_path: &[String], prefix: &str) -> Vec<&'static str> {
        let mut node = self;
        for segment in qualifier_path {
            let NamespaceNode::Branch(children) = node else {
                return Vec::new();
            };
            match children.iter().find(|(name, _)| *name == segment.as_str()) {
                Some((_, child)) => node = child,
                None => return Vec::new(),
            }
        }

        match node {
            NamespaceNode::Branch(children) => children
                .iter()
                .filter(|(name, _)| name.starts_with(prefix))
                .map(|(name, _)| *name)
                .collect(),
            NamespaceNode::Leaf => Vec::new(),
        }
    }
}

/// Shorthand: a branch whose children are all leaves (a package that
/// only contains classes).
fn classes(names: &[&'static str]) -> NamespaceNode {
    NamespaceNode::Branch(names.iter().map(|&n| (n, NamespaceNode::Leaf)).collect())
}

/// Build the Java namespace index.
///
/// Called once during `Backend` construction; the returned tree is
/// immutable afterwards.
pub fn java_namespace_index() -> NamespaceNode {
    use NamespaceNode::{Branch, Leaf};

    Branch(vec![
        (
            "java",
            Branch(vec![
                (
                    "lang",
                    classes(&["Object", "String", "System", "Exception", "Runnable"]),
                ),
                (
                    "util",
                    Branch(vec![
                        (
                            "concurrent",
                            classes(&["ConcurrentHashMap", "CountDownLatch", "CyclicBarrier"]),
                        ),
                        (
                            "function",
                            classes(&["BiConsumer", "BiFunction", "BinaryOperator"]),
                        ),
                        ("stream", classes(&["Collector", "Collectors", "Stream"])),
                        ("ArrayList", Leaf),
                        ("HashMap", Leaf),
                        ("HashSet", Leaf),
                        ("LinkedList", Leaf),
                    ]),
                ),
                (
                    "io",
                    classes(&["File", "FileInputStream", "FileOutputStream", "IOException"]),
                ),
                (
                    "net",
                    classes(&["Socket", "ServerSocket", "URL", "URLConnection"]),
                ),
                (
                    "nio",
                    Branch(vec![(
                        "file",
                        classes(&["Files", "Path", "Paths", "FileSystems"]),
                    )]),
                ),
                (
                    "math",
                    classes(&["BigDecimal", "BigInteger", "Math", "Random"]),
                ),
                (
                    "time",
                    Branch(vec![
                        (
                            "temporal",
                            classes(&["ChronoField", "ChronoUnit", "Temporal"]),
                        ),
                        ("LocalDate", Leaf),
                        ("LocalDateTime", Leaf),
                        ("LocalTime", Leaf),
                        ("ZoneId", Leaf),
                        ("ZonedDateTime", Leaf),
                    ]),
                ),
                (
                    "sql",
                    classes(&["Connection", "DriverManager", "PreparedStatement", "ResultSet"]),
                ),
                (
                    "security",
                    Branch(vec![
                        ("cert", classes(&["Certificate", "X509Certificate"])),
                        ("Key", Leaf),
                        ("KeyFactory", Leaf),
                        ("KeyPair", Leaf),
                        ("MessageDigest", Leaf),
                    ]),
                ),
                ("Optional", Leaf),
                ("Random", Leaf),
            ]),
        ),
        (
            "javax",
            Branch(vec![
                ("crypto", classes(&["Cipher", "KeyGenerator", "Mac"])),
                ("net", classes(&["ServerSocketFactory", "SocketFactory"])),
                (
                    "servlet",
                    classes(&["HttpServlet", "ServletContext", "ServletException"]),
                ),
                ("swing", classes(&["JButton", "JFrame", "JPanel", "JTable"])),
            ]),
        ),
        (
            "org",
            Branch(vec![
                (
                    "w3c",
                    Branch(vec![("dom", classes(&["Document", "Element", "Node"]))]),
                ),
                (
                    "xml",
                    Branch(vec![
                        ("sax", classes(&["SAXException", "XMLReader"])),
                        (
                            "parsers",
                            classes(&["DocumentBuilder", "DocumentBuilderFactory"]),
                        ),
                    ]),
                ),
            ]),
        ),
    ])
}

// ─── Tests ──────────────────────────────────────────────────────────────────
