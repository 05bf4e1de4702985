use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::ast::{
    Expr, Extern, FunctionDeclaration, StructDeclaration, TopLevelDecl, UnionDeclaration,
};

use super::context::Context;
use super::error::{CheckError, ImportCycle, ImportNotFound};
use super::function::{Function, GenericFunction};
use super::module::{FunctionEntry, Module};
use super::stmt::check_body;
use super::typed::{CheckedBody, CheckedDecl};
use super::types::{DeclKind, GenericType, GenericTypeDeclaration, Type, TypeEntry};

/// How an import's dotted module name becomes a filesystem path and is
/// turned into top-level declarations (§6). Implemented by the host
/// embedding this crate — the lexer/parser is an external collaborator the
/// checker only calls through this seam.
pub trait SourceProvider {
    fn load(&self, path: &Path) -> std::io::Result<Vec<TopLevelDecl>>;
}

/// The checker's only configurable knobs (§6): the primitive set is fixed
/// and lives in [`super::primitives`]; everything else the driver needs is
/// here.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub source_extension: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            source_extension: "lang".to_string(),
        }
    }
}

/// Top-level driver (§4.6). Owns the source provider and the
/// currently-in-progress import set so that a cyclic import is rejected
/// with [`CheckError::ImportCycle`] instead of the silent re-check the
/// source this was distilled from performs (§9 REDESIGN FLAG).
pub struct Driver<'a> {
    provider: &'a dyn SourceProvider,
    config: CheckerConfig,
    in_progress: RefCell<HashSet<String>>,
}

impl<'a> Driver<'a> {
    pub fn new(provider: &'a dyn SourceProvider, config: CheckerConfig) -> Self {
        Driver {
            provider,
            config,
            in_progress: RefCell::new(HashSet::new()),
        }
    }

    /// Checks every declaration in `decls` against `module`, in source
    /// order, short-circuiting on the first error (§5, §7). Each item is
    /// produced by [`Self::check_declaration`], so a caller wanting a
    /// streaming pipeline can call that directly instead.
    pub fn check_module(
        &self,
        module: &Module,
        decls: &[TopLevelDecl],
    ) -> Result<Vec<CheckedDecl>, CheckError> {
        let mut checked = Vec::with_capacity(decls.len());
        for decl in decls {
            checked.push(self.check_declaration(module, decl)?);
        }
        Ok(checked)
    }

    pub fn check_declaration(
        &self,
        module: &Module,
        decl: &TopLevelDecl,
    ) -> Result<CheckedDecl, CheckError> {
        match decl {
            TopLevelDecl::Import(i) => self.check_import(module, i),
            TopLevelDecl::StructDeclaration(s) => check_struct_declaration(module, s),
            TopLevelDecl::UnionDeclaration(u) => check_union_declaration(module, u),
            TopLevelDecl::Extern(e) => check_extern(module, e),
            TopLevelDecl::FunctionDeclaration(f) => check_function_declaration(module, f),
        }
    }

    fn check_import(
        &self,
        module: &Module,
        import: &crate::ast::Import,
    ) -> Result<CheckedDecl, CheckError> {
        let path = module_path(&import.module_name, &self.config.source_extension);
        debug!("checking import {} -> {}", import.module_name, path.display());

        if !self.in_progress.borrow_mut().insert(import.module_name.clone()) {
            error!("cyclic import detected on {}", import.module_name);
            return Err(CheckError::ImportCycle(
                ImportCycle {
                    module_name: import.module_name.clone(),
                },
                import.position.clone(),
            ));
        }

        let result = (|| {
            let decls = self.provider.load(&path).map_err(|_| {
                CheckError::ImportNotFound(
                    ImportNotFound {
                        module_name: import.module_name.clone(),
                        path: path.display().to_string(),
                    },
                    import.position.clone(),
                )
            })?;

            let imported_module = Module::new(import.module_name.clone());
            self.check_module(&imported_module, &decls)?;
            Ok(imported_module)
        })();

        self.in_progress.borrow_mut().remove(&import.module_name);

        let imported_module = result?;
        debug!("import {} resolved successfully", import.module_name);
        module.register_import(import.alias().to_string(), imported_module.clone());

        Ok(CheckedDecl::Import {
            alias: import.alias().to_string(),
            module: imported_module,
        })
    }
}

fn module_path(dotted: &str, extension: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for component in dotted.split('.') {
        path.push(component);
    }
    path.set_extension(extension);
    path
}

fn check_struct_declaration(
    module: &Module,
    s: &StructDeclaration,
) -> Result<CheckedDecl, CheckError> {
    if s.is_generic() {
        let generic = GenericType {
            name: s.name.value.clone(),
            parameters: s.generic.iter().map(|n| n.value.clone()).collect(),
            declaration: GenericTypeDeclaration::Struct(s.clone()),
            module_name: module.name(),
        };
        module.register_type(s.name.value.clone(), TypeEntry::Generic(generic));
        return Ok(CheckedDecl::DeferredGeneric {
            name: s.name.value.clone(),
        });
    }

    let mut fields = Vec::with_capacity(s.fields.len());
    for field in &s.fields {
        fields.push((field.name.value.clone(), module.import_type(&field.type_hint)?));
    }

    let type_ = Type::new(
        super::types::TypeName::Simple(s.name.value.clone()),
        fields,
        Some(DeclKind::Struct),
        module.name(),
    );
    module.register_type(s.name.value.clone(), TypeEntry::Type(type_.clone()));
    Ok(CheckedDecl::StructDeclaration(type_))
}

fn check_union_declaration(
    module: &Module,
    u: &UnionDeclaration,
) -> Result<CheckedDecl, CheckError> {
    if u.is_generic() {
        let generic = GenericType {
            name: u.name.value.clone(),
            parameters: u.generic.iter().map(|n| n.value.clone()).collect(),
            declaration: GenericTypeDeclaration::Union(u.clone()),
            module_name: module.name(),
        };
        module.register_type(u.name.value.clone(), TypeEntry::Generic(generic));
        return Ok(CheckedDecl::DeferredGeneric {
            name: u.name.value.clone(),
        });
    }

    let mut fields = Vec::with_capacity(u.fields.len());
    for field in &u.fields {
        fields.push((field.name.value.clone(), module.import_type(&field.type_hint)?));
    }

    let type_ = Type::new(
        super::types::TypeName::Simple(u.name.value.clone()),
        fields,
        Some(DeclKind::Union),
        module.name(),
    );
    module.register_type(u.name.value.clone(), TypeEntry::Type(type_.clone()));
    Ok(CheckedDecl::UnionDeclaration(type_))
}

fn check_extern(module: &Module, e: &Extern) -> Result<CheckedDecl, CheckError> {
    let mut parameters = Vec::with_capacity(e.head.parameters.len());
    for field in &e.head.parameters {
        parameters.push((field.name.value.clone(), module.import_type(&field.type_hint)?));
    }
    let return_type = resolve_return_type(module, e.head.return_hint.as_ref())?;

    let function = Function::new(e.head.name.value.clone(), parameters, return_type, None, None);
    module.register_function(
        e.head.name.value.clone(),
        FunctionEntry::Function(function.clone()),
    );
    Ok(CheckedDecl::Extern(function))
}

fn resolve_return_type(module: &Module, hint: Option<&Expr>) -> Result<Type, CheckError> {
    match hint {
        Some(hint) => module.import_type(hint),
        None => Ok(super::primitives::lookup("void").expect("void is always registered")),
    }
}

fn check_function_declaration(
    module: &Module,
    f: &FunctionDeclaration,
) -> Result<CheckedDecl, CheckError> {
    let head = &f.head;

    if head.is_generic() {
        let generic = GenericFunction {
            parameters: head.generic.iter().map(|n| n.value.clone()).collect(),
            declaration: f.clone(),
            module_name: module.name(),
            receiver_name: head.receiver.as_ref().map(|r| r.value.clone()),
        };

        if let Some(receiver) = &head.receiver {
            let associated_type =
                module.import_type(&Expr::Name(receiver.clone()))?;
            associated_type.register_generic_function(head.name.value.clone(), generic);
        } else {
            module.register_function(
                head.name.value.clone(),
                FunctionEntry::Generic(generic),
            );
        }
        return Ok(CheckedDecl::DeferredGeneric {
            name: head.name.value.clone(),
        });
    }

    let mut parameters = Vec::with_capacity(head.parameters.len());
    for field in &head.parameters {
        parameters.push((field.name.value.clone(), module.import_type(&field.type_hint)?));
    }
    let return_type = resolve_return_type(module, head.return_hint.as_ref())?;

    let receiver = match &head.receiver {
        Some(receiver_name) => Some(module.import_type(&Expr::Name(receiver_name.clone()))?),
        None => None,
    };

    let function = check_function_body(module, f, parameters, return_type, receiver.clone())?;

    match &receiver {
        Some(receiver_type) => {
            receiver_type.register_function(head.name.value.clone(), function.clone());
            Ok(CheckedDecl::FunctionDeclaration(function))
        }
        None => {
            module.register_function(
                head.name.value.clone(),
                FunctionEntry::Function(function.clone()),
            );
            Ok(CheckedDecl::FunctionDeclaration(function))
        }
    }
}

/// Shared by both direct function-declaration checking and generic
/// instantiation (§4.3 step 5): open a fresh nested `Context` pre-populated
/// with the (already-resolved) parameters, check the body, and package the
/// result into a `Function`. An associated function's receiver is just its
/// explicitly declared first parameter (invariant 3); there is nothing
/// extra to bind here beyond the parameter loop below.
pub(crate) fn check_function_body(
    module: &Module,
    declaration: &FunctionDeclaration,
    parameters: Vec<(String, Type)>,
    return_type: Type,
    receiver: Option<Type>,
) -> Result<Function, CheckError> {
    let mut ctx = Context::new(module.clone());
    for (name, type_) in &parameters {
        ctx.bind_variable(name.clone(), type_.clone());
    }

    let checked_body: CheckedBody = check_body(&mut ctx, &declaration.body)?;

    Ok(Function::new(
        declaration.head.name.value.clone(),
        parameters,
        return_type,
        receiver,
        Some(checked_body),
    ))
}
