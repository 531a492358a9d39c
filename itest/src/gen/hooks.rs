# [allow (unused_imports)] use :: gi :: sys :: { AllocKind , ManagedPtr , RawPtr } ; # [allow (unused_imports)] use :: gi :: registry :: { ClassInfo , TypeKind } ; # [allow (unused_imports)] use :: gi :: obj :: { GiClass , StructType } ; # [doc = "Plain struct `DemoHooks`, 48 bytes."] # [doc = ""] # [doc = "Fields without accessors:"] # [doc = "* `tags`: fixed-size array `gchar[8]`"] # [doc = "* `flags`: bit-field `guint : 1`"] # [derive (Clone , Debug)] pub struct Hooks { managed : ManagedPtr , } impl GiClass for Hooks { const CLASS_INFO : & 'static ClassInfo = & ClassInfo :: new ("Hooks" , TypeKind :: Struct) ; } impl StructType for Hooks { const SIZE : usize = 48 ; const ALLOC : AllocKind = AllocKind :: Plain ; fn from_managed (managed : ManagedPtr) -> Self { Self { managed } } fn managed (& self) -> & ManagedPtr { & self . managed } } impl :: gi :: obj :: Construct for Hooks { type Class = Hooks ; fn construct_with (interface : & :: gi :: obj :: InterfaceRef , ops : Vec < :: gi :: obj :: AttrOp < Self , :: gi :: obj :: ForNew >> ,) -> Result < Self , :: gi :: meta :: error :: AttrError > { :: gi :: obj :: construct_zeroed (interface , ops) } } # [doc = "Allocates a zero-filled `Hooks`.\n\n# Panics\nIf the allocator fails."] pub fn new_zero_hooks () -> Hooks { :: gi :: obj :: new_zeroed () } # [doc = "Reads `Hooks.user_data` (`gpointer`)."] pub fn hooks_read_user_data (instance : & Hooks) -> RawPtr { :: gi :: obj :: read_field (instance , 0) } # [doc = "Writes `Hooks.user_data`."] pub fn hooks_write_user_data (instance : & mut Hooks , value : RawPtr) { :: gi :: obj :: write_field (instance , 0 , value) } # [doc = "Reads `Hooks.size_allocate` (`HooksSizeAllocateFieldCallback`)."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" The field must be null or hold a function with the signature described by the callback type."] pub unsafe fn hooks_read_size_allocate (instance : & Hooks) -> super :: HooksSizeAllocateFieldCallback { unsafe { :: gi :: obj :: read_callback_field (instance , 8) } } # [doc = "Reads `Hooks.compare` (`HooksCompareFieldCallback`)."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" The field must be null or hold a function with the signature described by the callback type."] pub unsafe fn hooks_read_compare (instance : & Hooks) -> super :: HooksCompareFieldCallback { unsafe { :: gi :: obj :: read_callback_field (instance , 16) } }