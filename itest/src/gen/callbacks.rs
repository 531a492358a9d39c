# [allow (unused_imports)] use :: gi :: sys :: RawPtr ; # [doc = "Function pointer stored in field `size_allocate` of `Hooks`: `void (*)(DemoHooks* self, gint width, gint height)`."] pub type HooksSizeAllocateFieldCallback = Option < unsafe extern "C" fn (self_ : RawPtr , width : i32 , height : i32) > ; # [doc = "Function pointer stored in field `compare` of `Hooks`: `gint (*)(gconstpointer a, gconstpointer b)`."] pub type HooksCompareFieldCallback = Option < unsafe extern "C" fn (a : RawPtr , b : RawPtr) -> i32 > ;