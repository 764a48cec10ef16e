//! Emission of one wrapper block.
//!
//! For `int bdrv_foo(BlockDriverState *bs, int x)` the block contains:
//! - `BdrvCoFoo`, a context struct holding a `BdrvPollCo` header and a copy
//!   of every argument
//! - `bdrv_co_foo_entry`, the coroutine entry point, which calls
//!   `bdrv_co_foo` with the captured arguments, stores the result and marks
//!   the poll state as done
//! - `bdrv_foo` itself, which calls `bdrv_co_foo` directly when already in
//!   coroutine context and otherwise spawns the entry point on a context
//!   living in its own stack frame, then blocks in `bdrv_poll_co`
//!
//! The context outlives the coroutine because `bdrv_poll_co` only returns
//! once the entry point has cleared `in_progress`.

use super::utils::snake_to_camel;
use crate::types::WrapperPlan;

pub(super) fn generate_wrapper(plan: &WrapperPlan<'_>) -> String {
    let func = plan.decl;
    let wrapper = &func.name;
    let name = &plan.coroutine;
    let bs = &plan.owner;
    let struct_name = snake_to_camel(name);

    let fields = func.gen_block(|arg| format!("    {};", arg.decl));
    let forwarded = func.gen_list(|arg| format!("s->{}", arg.name));
    let decls = func.gen_list(|arg| arg.decl.clone());
    let names = func.gen_list(|arg| arg.name.clone());
    let inits = func.gen_block(|arg| format!("            .{0} = {0},", arg.name));

    format!(
        "/*
 * Wrappers for {name}
 */

typedef struct {struct_name} {{
    BdrvPollCo poll_state;
{fields}
}} {struct_name};

static void coroutine_fn {name}_entry(void *opaque)
{{
    {struct_name} *s = opaque;

    s->poll_state.ret = {name}({forwarded});
    s->poll_state.in_progress = false;

    bdrv_poll_co__on_exit();
}}

int {wrapper}({decls})
{{
    if (qemu_in_coroutine()) {{
        return {name}({names});
    }} else {{
        {struct_name} s = {{
            .poll_state.bs = {bs},
            .poll_state.in_progress = true,

{inits}
        }};

        s.poll_state.co = qemu_coroutine_create({name}_entry, &s);

        return bdrv_poll_co(&s.poll_state);
    }}
}}"
    )
}

#[cfg(test)]
mod tests {
    use crate::types::FuncDecl;
    use pretty_assertions::assert_eq;

    #[test]
    fn preadv_with_direct_handle() {
        let decl = FuncDecl::new(
            "int",
            "bdrv_preadv",
            "BlockDriverState *bs, int64_t offset, QEMUIOVector *qiov",
        )
        .unwrap();

        let expected = "/*
 * Wrappers for bdrv_co_preadv
 */

typedef struct BdrvCoPreadv {
    BdrvPollCo poll_state;
    BlockDriverState *bs;
    int64_t offset;
    QEMUIOVector *qiov;
} BdrvCoPreadv;

static void coroutine_fn bdrv_co_preadv_entry(void *opaque)
{
    BdrvCoPreadv *s = opaque;

    s->poll_state.ret = bdrv_co_preadv(s->bs, s->offset, s->qiov);
    s->poll_state.in_progress = false;

    bdrv_poll_co__on_exit();
}

int bdrv_preadv(BlockDriverState *bs, int64_t offset, QEMUIOVector *qiov)
{
    if (qemu_in_coroutine()) {
        return bdrv_co_preadv(bs, offset, qiov);
    } else {
        BdrvCoPreadv s = {
            .poll_state.bs = bs,
            .poll_state.in_progress = true,

            .bs = bs,
            .offset = offset,
            .qiov = qiov,
        };

        s.poll_state.co = qemu_coroutine_create(bdrv_co_preadv_entry, &s);

        return bdrv_poll_co(&s.poll_state);
    }
}";
        assert_eq!(decl.expand().unwrap(), expected);
    }

    #[test]
    fn child_handle_reaches_through_child() {
        let decl = FuncDecl::new("int", "bdrv_flush_child", "BdrvChild *child").unwrap();
        let code = decl.expand().unwrap();
        assert!(code.contains("            .poll_state.bs = child->bs,\n"));
        assert!(code.contains("typedef struct BdrvCoFlushChild {\n"));
        assert!(code.contains("s->poll_state.ret = bdrv_co_flush_child(s->child);"));
    }

    #[test]
    fn invalid_declarations_emit_nothing() {
        let decl = FuncDecl::new("int", "bdrv_co_flush", "BlockDriverState *bs").unwrap();
        assert!(decl.expand().is_err());
    }
}
