//! # Directorio Raíz
//! src/files/mod.rs
//!
//! Todo path que el servidor lee o escribe pasa por aquí. El target del
//! request se normaliza, se une al directorio raíz y se canonicaliza; si
//! el resultado queda fuera de la raíz la resolución es `Forbidden`.
//!
//! ```text
//! /page.html            → <root>/page.html
//! /docs/../page.html    → <root>/page.html
//! /../etc/passwd        → Forbidden
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Archivo que se sirve para `GET /`
pub const INDEX_FILE: &str = "page.html";

/// Archivo que se sirve cuando el recurso no existe
pub const NOT_FOUND_FILE: &str = "404.html";

/// Resultado de resolver un target contra la raíz
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Path absoluto y canónico dentro de la raíz
    File(PathBuf),

    /// No existe (o no es un archivo regular)
    Missing,

    /// El path escapa del directorio raíz
    Forbidden,
}

/// Directorio raíz canonicalizado
#[derive(Debug, Clone)]
pub struct FileRoot {
    root: PathBuf,
}

impl FileRoot {
    /// Abre un directorio raíz
    ///
    /// Falla si el directorio no existe o no es un directorio.
    pub fn new(dir: impl AsRef<Path>) -> io::Result<Self> {
        let root = dir.as_ref().canonicalize()?;

        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root.display()),
            ));
        }

        Ok(Self { root })
    }

    /// Path canónico de la raíz
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path de la página de bienvenida
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Path de la página de "no encontrado"
    pub fn fallback_path(&self) -> PathBuf {
        self.root.join(NOT_FOUND_FILE)
    }

    /// Resuelve el target de un GET a un archivo regular existente
    ///
    /// # Ejemplo
    /// ```no_run
    /// use http_file_server::files::{FileRoot, Resolved};
    ///
    /// let root = FileRoot::new("www").unwrap();
    /// assert_eq!(root.resolve("/../secret"), Resolved::Forbidden);
    /// ```
    pub fn resolve(&self, target: &str) -> Resolved {
        let relative = match normalize_target(target) {
            Some(relative) => relative,
            None => return Resolved::Forbidden,
        };

        // "/page.html/" nombra un directorio, no el archivo
        if has_trailing_slash(target) {
            return Resolved::Missing;
        }

        // canonicalize sigue los symlinks: un enlace hacia afuera también es Forbidden
        match self.root.join(&relative).canonicalize() {
            Ok(path) if !path.starts_with(&self.root) => Resolved::Forbidden,
            Ok(path) if path.is_file() => Resolved::File(path),
            _ => Resolved::Missing,
        }
    }

    /// Resuelve el target de un POST al path donde se escribirá el body
    ///
    /// El archivo puede no existir todavía, pero su directorio padre sí.
    pub fn resolve_upload(&self, target: &str) -> Resolved {
        let relative = match normalize_target(target) {
            Some(relative) => relative,
            None => return Resolved::Forbidden,
        };

        if has_trailing_slash(target) {
            return Resolved::Forbidden;
        }

        let file_name = match relative.file_name() {
            Some(name) => name.to_owned(),
            // "/" o equivalente: no se puede escribir sobre la raíz
            None => return Resolved::Forbidden,
        };

        let parent = relative.parent().unwrap_or_else(|| Path::new(""));
        let parent = match self.root.join(parent).canonicalize() {
            Ok(parent) => parent,
            Err(_) => return Resolved::Missing,
        };

        if !parent.starts_with(&self.root) {
            return Resolved::Forbidden;
        }

        let path = parent.join(file_name);

        if path.is_dir() {
            return Resolved::Forbidden;
        }

        // Un symlink existente podría apuntar fuera de la raíz
        if let Ok(existing) = path.canonicalize() {
            if !existing.starts_with(&self.root) {
                return Resolved::Forbidden;
            }
        }

        Resolved::File(path)
    }

    /// Escribe (crea o trunca) un archivo con los bytes recibidos
    pub fn write_upload(&self, path: &Path, body: &[u8]) -> io::Result<()> {
        fs::write(path, body)
    }
}

/// `true` si el target termina en `/` y no es la raíz
fn has_trailing_slash(target: &str) -> bool {
    target.len() > 1 && target.ends_with('/')
}

/// Normaliza el target del request a un path relativo
///
/// Quita las barras iniciales, descarta `.` y resuelve `..` de forma
/// léxica. Retorna `None` si algún `..` sube por encima de la raíz.
fn normalize_target(target: &str) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in Path::new(target.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    Some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn site() -> (tempfile::TempDir, FileRoot) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<h1>hola</h1>").unwrap();
        fs::write(dir.path().join(NOT_FOUND_FILE), "<h1>404</h1>").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/readme.txt"), "readme").unwrap();
        let root = FileRoot::new(dir.path()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_new_rejects_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(FileRoot::new(dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_new_rejects_file() {
        let (_dir, root) = site();
        assert!(FileRoot::new(root.index_path()).is_err());
    }

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target("/a/b.txt"), Some(PathBuf::from("a/b.txt")));
        assert_eq!(normalize_target("//a/./b.txt"), Some(PathBuf::from("a/b.txt")));
        assert_eq!(normalize_target("/a/../b.txt"), Some(PathBuf::from("b.txt")));
        assert_eq!(normalize_target("/"), Some(PathBuf::new()));
        assert_eq!(normalize_target("/../b.txt"), None);
        assert_eq!(normalize_target("/a/../../b.txt"), None);
    }

    #[test]
    fn test_resolve_existing_file() {
        let (_dir, root) = site();
        assert_eq!(root.resolve("/page.html"), Resolved::File(root.index_path()));
        assert_eq!(
            root.resolve("/docs/readme.txt"),
            Resolved::File(root.path().join("docs/readme.txt"))
        );
    }

    #[test]
    fn test_resolve_dot_segments_inside_root() {
        let (_dir, root) = site();
        assert_eq!(root.resolve("/docs/../page.html"), Resolved::File(root.index_path()));
    }

    #[test]
    fn test_resolve_missing_and_directories() {
        let (_dir, root) = site();
        assert_eq!(root.resolve("/nope.html"), Resolved::Missing);
        assert_eq!(root.resolve("/docs"), Resolved::Missing);
        assert_eq!(root.resolve("/"), Resolved::Missing);
        // Sin decodificación: el query string es parte del nombre
        assert_eq!(root.resolve("/page.html?x=1"), Resolved::Missing);
    }

    #[test]
    fn test_resolve_trailing_slash_is_missing() {
        let (_dir, root) = site();
        assert_eq!(root.resolve("/page.html/"), Resolved::Missing);
        assert_eq!(root.resolve("/docs/"), Resolved::Missing);
        assert_eq!(root.resolve("/../page.html/"), Resolved::Forbidden);
    }

    #[test]
    fn test_resolve_traversal_is_forbidden() {
        let (_dir, root) = site();
        assert_eq!(root.resolve("/../secret.txt"), Resolved::Forbidden);
        assert_eq!(root.resolve("/docs/../../secret.txt"), Resolved::Forbidden);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_symlink_escape_is_forbidden() {
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("secret.txt"), "secret").unwrap();

        let (dir, root) = site();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        assert_eq!(root.resolve("/link/secret.txt"), Resolved::Forbidden);
    }

    #[test]
    fn test_resolve_upload() {
        let (_dir, root) = site();
        assert_eq!(
            root.resolve_upload("/upload.txt"),
            Resolved::File(root.path().join("upload.txt"))
        );
        assert_eq!(
            root.resolve_upload("/docs/new.txt"),
            Resolved::File(root.path().join("docs/new.txt"))
        );
    }

    #[test]
    fn test_resolve_upload_rejections() {
        let (_dir, root) = site();
        assert_eq!(root.resolve_upload("/../evil.txt"), Resolved::Forbidden);
        assert_eq!(root.resolve_upload("/"), Resolved::Forbidden);
        assert_eq!(root.resolve_upload("/docs"), Resolved::Forbidden);
        assert_eq!(root.resolve_upload("/upload.txt/"), Resolved::Forbidden);
        assert_eq!(root.resolve_upload("/missing/dir/file.txt"), Resolved::Missing);
    }

    #[test]
    fn test_write_upload_truncates() {
        let (_dir, root) = site();
        let path = root.path().join("upload.txt");

        root.write_upload(&path, b"a much longer first version").unwrap();
        root.write_upload(&path, b"short").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"short");
    }
}
