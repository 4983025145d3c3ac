use tollgate_core::{
    messages, NotInstantiableReason, TypeDescriptor, TypeShape, Violation, ViolationKind,
};

use crate::report::reject;

/// Verifies that a described type can be constructed directly.
///
/// Interfaces, abstract base types and generic definitions with unbound
/// parameters are rejected; closed generic instantiations and primitive types
/// pass.
pub fn is_instantiable(
    descriptor: Option<&TypeDescriptor>,
    param_name: &str,
) -> Result<(), Violation> {
    let Some(descriptor) = descriptor else {
        return reject(Violation::for_param_with_message(
            ViolationKind::Null,
            param_name,
            messages::NULL,
        ));
    };
    let reason = match descriptor.shape() {
        TypeShape::Interface => Some(NotInstantiableReason::Interface),
        TypeShape::Abstract => Some(NotInstantiableReason::Abstract),
        TypeShape::Concrete if descriptor.is_open_generic() => {
            Some(NotInstantiableReason::OpenGeneric)
        }
        TypeShape::Concrete => None,
    };
    match reason {
        Some(reason) => reject(Violation::not_instantiable(
            param_name,
            descriptor.clone(),
            reason,
            messages::INSTANTIABLE,
        )),
        None => Ok(()),
    }
}
